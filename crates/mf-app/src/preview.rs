//! Component previews behind the dev routes, fed with the seed records.

use crate::listing::{ListingFilter, ListingPanel, ListingView, RecordCard, StatusTab, ToCard};
use crate::shell::{DevPreview, NavMenu, Route};

use mf_core::{MissingPersonReport, MissingPersonStatus, Record, UserAccount, seed};
use mf_gateway::{AuthContext, Session};

use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "preview", rename_all = "snake_case")]
pub enum Preview {
    Index {
        routes: Vec<Route>,
    },
    MissingPersonCard {
        card: Option<RecordCard>,
    },
    MissingPersonsGrid {
        tabs: Vec<&'static str>,
        panel: ListingPanel,
    },
    Navbar {
        signed_out: NavMenu,
        signed_in: NavMenu,
    },
}

pub fn render(preview: DevPreview) -> Preview {
    match preview {
        DevPreview::Index => Preview::Index {
            routes: DevPreview::ALL.map(Route::Dev).to_vec(),
        },
        DevPreview::MissingPersonCard => Preview::MissingPersonCard {
            card: seed::missing_persons().first().map(ToCard::to_card),
        },
        DevPreview::MissingPersonsGrid => {
            let mut view = ListingView::<MissingPersonReport>::new();
            let ticket = view.begin_fetch();
            let records = seed::missing_persons()
                .into_iter()
                .map(Record::MissingPerson)
                .collect();
            view.finish_fetch(ticket, Ok(records));

            Preview::MissingPersonsGrid {
                tabs: StatusTab::<MissingPersonStatus>::tabs()
                    .iter()
                    .map(StatusTab::label)
                    .collect(),
                panel: view.render(&ListingFilter::default()),
            }
        }
        DevPreview::Navbar => {
            let auth = AuthContext::with_session(Session {
                access_token: String::from("preview"),
                refresh_token: None,
                expires_at: None,
                user: UserAccount {
                    id: Uuid::nil(),
                    email: String::from("jane.doe@example.com"),
                    first_name: String::from("Jane"),
                    last_name: String::from("Doe"),
                },
            });

            Preview::Navbar {
                signed_out: NavMenu::for_auth(&AuthContext::new()),
                signed_in: NavMenu::for_auth(&auth).with_notifications(12),
            }
        }
    }
}
