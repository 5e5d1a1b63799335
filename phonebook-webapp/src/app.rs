use std::rc::Rc;

use log::*;

use wasm_bindgen_futures::spawn_local;
use yew::services::timeout::{TimeoutService, TimeoutTask};
use yew::{html, Component, ComponentLink, Html, ShouldRender};

use phonebook_commons::ctrl::PhonebookController;
use phonebook_commons::model::PersonId;
use phonebook_commons::notification::Ticket;
use phonebook_commons::state::{PhonebookState, StateChange};
use phonebook_commons::{load_config, ClientConfig};

use crate::confirm::WindowConfirmation;
use crate::transport::HttpPersons;
use crate::views::*;

pub enum AppMessage {
    Change(StateChange),
    Changes(Vec<StateChange>),
    Submit,
    Delete(PersonId),
    ApplicationError(String),
}

pub struct AppContainer {
    link: ComponentLink<Self>,
    ctrl: PhonebookController,
    state: PhonebookState,
    expiry: Option<TimeoutTask>,
}

impl Component for AppContainer {
    type Message = AppMessage;
    type Properties = ();

    fn create(_: Self::Properties, link: ComponentLink<Self>) -> Self {
        info!("Initialising app...");

        let config = load_config(option_env!("PHONEBOOK_CONFIG")).unwrap_or_else(|error| {
            error!("Falling back to default configuration: {}", error);
            ClientConfig::default()
        });

        let ctrl = PhonebookController::new(
            Rc::new(HttpPersons::new(config.base_url.clone())),
            Rc::new(WindowConfirmation),
        );

        let local_ctrl = ctrl.clone();
        let local_link = link.clone();
        spawn_local(async move {
            let changes = local_ctrl.load().await;
            local_link.send_message(AppMessage::Changes(changes));
        });

        AppContainer {
            link,
            ctrl,
            state: PhonebookState::new(config.notification_timeout()),
            expiry: None,
        }
    }

    fn update(&mut self, msg: Self::Message) -> ShouldRender {
        match msg {
            AppMessage::Change(change) => {
                self.dispatch(change);
                true
            }
            AppMessage::Changes(changes) => {
                for change in changes {
                    self.dispatch(change);
                }
                true
            }
            AppMessage::Submit => {
                let records = self.state.records().to_vec();
                let draft = self.state.draft().clone();

                let local_ctrl = self.ctrl.clone();
                let local_link = self.link.clone();
                spawn_local(async move {
                    let changes = local_ctrl.submit(&records, &draft).await;
                    local_link.send_message(AppMessage::Changes(changes));
                });
                false
            }
            AppMessage::Delete(id) => {
                let records = self.state.records().to_vec();

                let local_ctrl = self.ctrl.clone();
                let local_link = self.link.clone();
                spawn_local(async move {
                    match local_ctrl.delete(&records, &id).await {
                        Ok(changes) => local_link.send_message(AppMessage::Changes(changes)),
                        Err(error) => local_link.send_message(AppMessage::ApplicationError(
                            format!("Failed to delete {}: {}", id, error),
                        )),
                    }
                });
                false
            }
            AppMessage::ApplicationError(message) => {
                error!("{}", message);
                false
            }
        }
    }

    fn change(&mut self, _: Self::Properties) -> ShouldRender {
        // don't render
        false
    }

    fn view(&self) -> Html {
        let visible = self.state.visible_records().into_iter().cloned().collect::<Vec<_>>();

        html! {
        <div>
            <h2>{"Phonebook"}</h2>
            <notification::NotificationBanner notification=self.state.notification().cloned() />
            <filter::Filter
                term=self.state.search_term().to_string()
                on_change=self.link.callback(|term: String| AppMessage::Change(StateChange::SearchTerm(term))) />
            <h3>{"Add a new"}</h3>
            <person_form::PersonForm
                draft=self.state.draft().clone()
                on_name=self.link.callback(|name: String| AppMessage::Change(StateChange::DraftName(name)))
                on_number=self.link.callback(|number: String| AppMessage::Change(StateChange::DraftNumber(number)))
                on_submit=self.link.callback(|_: ()| AppMessage::Submit) />
            <h3>{"Numbers"}</h3>
            <persons::Persons
                records=visible
                on_delete=self.link.callback(AppMessage::Delete) />
        </div>
        }
    }
}

impl AppContainer {
    fn dispatch(&mut self, change: StateChange) {
        if let Some(ticket) = self.state.apply(change) {
            self.arm_expiry(ticket);
        }
    }

    /// Replacing the task cancels the timer of the previous notification. Which ticket may
    /// expire is covered by `state/tests.rs::notification_expiry_test`.
    fn arm_expiry(&mut self, ticket: Ticket) {
        let callback = self
            .link
            .callback(move |_| AppMessage::Change(StateChange::NotificationExpired(ticket)));

        self.expiry = Some(TimeoutService::spawn(self.state.notification_timeout(), callback));
    }
}
