//! Executes one parsed command against a gateway and returns its JSON result.

use crate::commands::Commands;
use crate::list_commands::ListCommands;
use crate::report_commands::ReportCommands;
use crate::{CliError, CliResult, session_file};

use mf_app::form::{FieldValue, fields};
use mf_app::listing::{ListingFilter, ListingPanel, ListingView, StatusTab, ToCard};
use mf_app::preview;
use mf_app::shell::{NavMenu, Route, RouteTable, Shell};
use mf_app::workflow::kinds::{
    LoginSubmission, MissingPersonSubmission, RegistrationSubmission, SightingSubmission,
};
use mf_app::workflow::{SubmissionKind, SubmissionStatus, SubmissionWorkflow};
use mf_config::Config;
use mf_core::{Listable, MissingPersonReport, PhotoAttachment, RecordStatus, SightingReport};
use mf_gateway::{AuthContext, Gateway};

use std::path::PathBuf;

use log::{info, warn};
use serde_json::{Value, json};

type FormValues = Vec<(&'static str, FieldValue)>;

pub struct Runner<'a> {
    config: &'a Config,
    gateway: &'a dyn Gateway,
    gateway_label: String,
    shell: Shell,
    session_dir: PathBuf,
}

impl<'a> Runner<'a> {
    pub fn new(
        config: &'a Config,
        gateway: &'a dyn Gateway,
        gateway_label: impl Into<String>,
        auth: AuthContext,
        session_dir: PathBuf,
    ) -> Self {
        Self {
            config,
            gateway,
            gateway_label: gateway_label.into(),
            shell: Shell::new(RouteTable::from_config(&config.app), auth),
            session_dir,
        }
    }

    pub fn auth(&self) -> &AuthContext {
        self.shell.auth()
    }

    pub async fn run(&mut self, command: Commands) -> CliResult<Value> {
        match command {
            Commands::Report { action } => match action {
                ReportCommands::Missing {
                    full_name,
                    age,
                    gender,
                    last_seen_date,
                    last_seen_time,
                    last_seen_location,
                    description,
                    contact_info,
                    photo,
                } => {
                    let mut values: FormValues = vec![
                        (fields::FULL_NAME, full_name.into()),
                        (fields::AGE, age.into()),
                        (fields::GENDER, gender.into()),
                        (fields::LAST_SEEN_DATE, last_seen_date.into()),
                        (fields::LAST_SEEN_TIME, last_seen_time.into()),
                        (fields::LAST_SEEN_LOCATION, last_seen_location.into()),
                        (fields::DESCRIPTION, description.into()),
                        (fields::CONTACT_INFO, contact_info.into()),
                    ];
                    push_photo(&mut values, photo);
                    self.submit(MissingPersonSubmission::from_config(self.config), values)
                        .await
                }
                ReportCommands::Sighting {
                    person_name,
                    date,
                    time,
                    location,
                    description,
                    contact_info,
                    confidence,
                    photo,
                } => {
                    let mut values: FormValues = vec![
                        (fields::PERSON_NAME, person_name.unwrap_or_default().into()),
                        (fields::SIGHTING_DATE, date.into()),
                        (fields::SIGHTING_TIME, time.into()),
                        (fields::LOCATION, location.into()),
                        (fields::DESCRIPTION, description.into()),
                        (fields::CONTACT_INFO, contact_info.into()),
                        (fields::CONFIDENCE_LEVEL, confidence.into()),
                    ];
                    push_photo(&mut values, photo);
                    self.submit(SightingSubmission::from_config(self.config), values)
                        .await
                }
            },

            Commands::Register {
                first_name,
                last_name,
                email,
                password,
                confirm_password,
                accept_terms,
            } => {
                let values: FormValues = vec![
                    (fields::FIRST_NAME, first_name.into()),
                    (fields::LAST_NAME, last_name.into()),
                    (fields::EMAIL, email.into()),
                    (fields::PASSWORD, password.into()),
                    (fields::CONFIRM_PASSWORD, confirm_password.into()),
                    (fields::ACCEPT_TERMS, accept_terms.into()),
                ];
                self.submit(RegistrationSubmission::from_config(self.config), values)
                    .await
            }

            Commands::Login { email, password } => self.login(email, password).await,

            Commands::Logout => self.logout().await,

            Commands::Whoami => Ok(match self.auth().user() {
                Some(user) => json!({
                    "signed_in": true,
                    "display_name": user.display_name(),
                    "user": user,
                }),
                None => json!({ "signed_in": false }),
            }),

            Commands::Menu { notifications } => {
                let menu = self.shell.nav_menu().with_notifications(notifications);
                Ok(json!({
                    "menu": menu,
                    "footer": NavMenu::footer_links(),
                }))
            }

            Commands::List { action } => match action {
                ListCommands::MissingPersons { query, status } => {
                    self.list::<MissingPersonReport>(query, &status).await
                }
                ListCommands::Sightings { query, status } => {
                    self.list::<SightingReport>(query, &status).await
                }
            },

            Commands::Routes { resolve } => Ok(match resolve {
                Some(path) => {
                    let mounted = self.shell.routes().is_mounted(&path);
                    let route = self.shell.navigate(&path);
                    json!({
                        "path": path,
                        "route": route,
                        "title": route.title(),
                        "mounted": mounted,
                    })
                }
                None => {
                    let routes: Vec<Value> = self
                        .shell
                        .routes()
                        .routes()
                        .iter()
                        .map(|route| json!({ "path": route, "title": route.title() }))
                        .collect();
                    json!({
                        "dev_routes": self.shell.routes().dev_routes(),
                        "routes": routes,
                    })
                }
            }),

            Commands::Preview { path } => {
                if !self.shell.routes().dev_routes() {
                    return Err(CliError::usage(
                        "Dev routes are disabled (set app.dev_routes or MF_DEV_ROUTES=true)",
                    ));
                }
                match self.shell.navigate(&path) {
                    Route::Dev(page) => Ok(serde_json::to_value(preview::render(page))?),
                    other => Err(CliError::usage(format!(
                        "{path} is not a preview route (resolved to {other})"
                    ))),
                }
            }

            Commands::Status => self.status().await,
        }
    }

    /// Fill a fresh form, submit it once, and report the outcome.
    async fn submit<K: SubmissionKind>(&self, kind: K, values: FormValues) -> CliResult<Value> {
        let mut workflow = SubmissionWorkflow::new(kind);
        for (field, value) in values {
            workflow.update(field, value)?;
        }

        let redirect = workflow.submit(self.gateway).await?;

        match workflow.status() {
            SubmissionStatus::Error(err) => Err(CliError::rejected(err.message())),
            status => Ok(json!({
                "status": status.name(),
                "message": workflow.kind().labels().success,
                "redirect": redirect.map(|r| json!({
                    "target": r.target,
                    "delay_secs": r.delay.as_secs(),
                })),
            })),
        }
    }

    async fn login(&self, email: String, password: String) -> CliResult<Value> {
        let values: FormValues = vec![
            (fields::EMAIL, email.into()),
            (fields::PASSWORD, password.into()),
        ];
        let kind = LoginSubmission::from_config(self.config, self.auth().clone());
        let mut outcome = self.submit(kind, values).await?;

        if let Some(session) = self.auth().current() {
            session_file::save(&self.session_dir, &session)?;
            outcome["user"] = serde_json::to_value(&session.user)?;
        }
        Ok(outcome)
    }

    async fn logout(&mut self) -> CliResult<Value> {
        let was_signed_in = self.auth().is_signed_in();
        let result = self.shell.sign_out(self.gateway).await;
        session_file::clear(&self.session_dir)?;
        result?;

        info!("Signed out");
        Ok(json!({
            "signed_out": was_signed_in,
            "route": self.shell.current(),
        }))
    }

    async fn list<T: Listable + ToCard>(&self, query: String, status: &str) -> CliResult<Value> {
        let tab = StatusTab::<T::Status>::parse(status)?;
        let filter = ListingFilter::new(query, tab);

        let mut view = ListingView::<T>::new();
        view.load(self.gateway).await;

        match view.render(&filter) {
            ListingPanel::Error { message, .. } => Err(CliError::rejected(message)),
            panel => Ok(json!({
                "query": filter.query,
                "tab": tab.as_str(),
                "tabs": tab_names::<T::Status>(),
                "panel": panel,
            })),
        }
    }

    async fn status(&self) -> CliResult<Value> {
        self.config.log_summary();

        let (reachable, error) = match self.gateway.ping().await {
            Ok(()) => (true, None),
            Err(err) => {
                warn!("Gateway unreachable: {err}");
                (false, Some(err.to_string()))
            }
        };

        Ok(json!({
            "gateway": self.gateway_label,
            "reachable": reachable,
            "error": error,
            "signed_in": self.auth().is_signed_in(),
            "dev_routes": self.config.app.dev_routes,
        }))
    }
}

fn push_photo(values: &mut FormValues, photo: Option<String>) {
    if let Some(file_name) = photo {
        values.push((fields::PHOTO, PhotoAttachment::new(file_name).into()));
    }
}

fn tab_names<S: RecordStatus>() -> Vec<&'static str> {
    StatusTab::<S>::tabs().iter().map(StatusTab::as_str).collect()
}
