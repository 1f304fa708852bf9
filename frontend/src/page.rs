use nightmode::{Preference, Settings};
use yew::prelude::*;

use crate::night_mode::toggle_night_mode;

pub enum Msg {
    Toggle,
}

#[derive(Properties, PartialEq)]
pub struct PageProps {
    pub settings: Settings,
    pub initial: Option<Preference>,
}

pub struct Page {
    preference: Option<Preference>,
}

/// tooltip of the toggle control, describing what a click will do
fn button_title(preference: Option<Preference>) -> &'static str {
    match preference {
        Some(Preference::Enabled) => "Switch to day mode",
        Some(Preference::Disabled) => "Switch to night mode",
        None => "Night mode unavailable",
    }
}

fn status(preference: Option<Preference>) -> &'static str {
    match preference {
        Some(Preference::Enabled) => "Night mode is on",
        Some(Preference::Disabled) => "Night mode is off",
        None => "Night mode could not be loaded",
    }
}

impl Component for Page {
    type Message = Msg;
    type Properties = PageProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            preference: ctx.props().initial,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Toggle => {
                self.preference = toggle_night_mode(ctx.props().settings.clone());
            }
        };

        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
          <>
            <header>
              <h1>{"Night"}<span>{"mode"}</span></h1>
              <div>
                <button
                  class={ctx.props().settings.control_class.clone()}
                  title={button_title(self.preference)}
                  onclick={link.callback(|_| Msg::Toggle)}
                />
              </div>
            </header>
            <main>
              <p>{status(self.preference)}</p>
            </main>
          </>
        }
    }
}
