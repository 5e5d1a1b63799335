use yew::prelude::*;
use yew::{html, Component, ComponentLink, Html, InputData, Properties, ShouldRender};

#[derive(Clone, Properties)]
pub struct FilterProps {
    pub term: String,
    pub on_change: Callback<String>,
}

pub struct Filter {
    props: FilterProps,
}

impl Component for Filter {
    type Message = ();
    type Properties = FilterProps;

    fn create(props: Self::Properties, _: ComponentLink<Self>) -> Self {
        Filter { props }
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
        <div>
            {"filter shown with: "}
            <input
                value=&self.props.term
                oninput=self.props.on_change.reform(|e: InputData| e.value) />
        </div>
        }
    }
}
