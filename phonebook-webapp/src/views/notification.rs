use yew::prelude::*;
use yew::{html, Component, ComponentLink, Html, Properties, ShouldRender};

use phonebook_commons::model::Notification;

#[derive(Clone, Properties)]
pub struct BannerProps {
    pub notification: Option<Notification>,
}

pub struct NotificationBanner {
    props: BannerProps,
}

impl Component for NotificationBanner {
    type Message = ();
    type Properties = BannerProps;

    fn create(props: Self::Properties, _: ComponentLink<Self>) -> Self {
        NotificationBanner { props }
    }

    fn update(&mut self, _: Self::Message) -> ShouldRender {
        false
    }

    fn change(&mut self, props: Self::Properties) -> ShouldRender {
        if self.props.notification != props.notification {
            self.props = props;
            true
        } else {
            false
        }
    }

    fn view(&self) -> Html {
        match &self.props.notification {
            None => html! {},
            Some(notification) => html! {
                <div class=notification.kind.css_class()>{ &notification.message }</div>
            },
        }
    }
}
