use yew::prelude::*;
use yew::{
    html, Component, ComponentLink, FocusEvent, Html, InputData, Properties, ShouldRender,
};

use phonebook_commons::model::Draft;

#[derive(Clone, Properties)]
pub struct FormProps {
    pub draft: Draft,
    pub on_name: Callback<String>,
    pub on_number: Callback<String>,
    pub on_submit: Callback<()>,
}

pub struct PersonForm {
    props: FormProps,
}

impl Component for PersonForm {
    type Message = ();
    type Properties = FormProps;

    fn create(props: Self::Properties, _: ComponentLink<Self>) -> Self {
        PersonForm { props }
    }

    fn update(&mut self, _: Self::Message) -> ShouldRender {
        false
    }

    fn change(&mut self, props: Self::Properties) -> ShouldRender {
        self.props = props;
        true
    }

    fn view(&self) -> Html {
        html! {
        <form class="person_form"
            onsubmit=self.props.on_submit.reform(|e: FocusEvent| e.prevent_default())>
            <div>
                {"name: "}
                <input
                    value=&self.props.draft.name
                    oninput=self.props.on_name.reform(|e: InputData| e.value) />
            </div>
            <div>
                {"number: "}
                <input
                    value=&self.props.draft.number
                    oninput=self.props.on_number.reform(|e: InputData| e.value) />
            </div>
            <div>
                <button type="submit">{"add"}</button>
            </div>
        </form>
        }
    }
}
