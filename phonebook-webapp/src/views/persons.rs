use yew::prelude::*;
use yew::{html, Component, ComponentLink, Html, Properties, ShouldRender};

use phonebook_commons::model::{PersonId, Record};

#[derive(Clone, Properties)]
pub struct PersonsProps {
    pub records: Vec<Record>,
    pub on_delete: Callback<PersonId>,
}

pub struct Persons {
    props: PersonsProps,
}

impl Component for Persons {
    type Message = ();
    type Properties = PersonsProps;

    fn create(props: Self::Properties, _: ComponentLink<Self>) -> Self {
        Persons { props }
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
        <div class="list">
            {for self.props.records.iter().map(|record| {
                let id = record.id.clone();
                html! {
                <div>
                    { &record.name }{" "}{ &record.number }{" "}
                    <button onclick=self.props.on_delete.reform(move |_| id.clone())>{"delete"}</button>
                </div>
                }
            })}
        </div>
        }
    }
}
