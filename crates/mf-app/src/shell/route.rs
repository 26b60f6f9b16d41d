use serde::{Serialize, Serializer};

/// Component previews mounted under `/dev` when the dev-routes flag is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DevPreview {
    Index,
    MissingPersonCard,
    MissingPersonsGrid,
    Navbar,
}

impl DevPreview {
    pub const ALL: [DevPreview; 4] = [
        Self::Index,
        Self::MissingPersonCard,
        Self::MissingPersonsGrid,
        Self::Navbar,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Self::Index => "/dev",
            Self::MissingPersonCard => "/dev/missing-person-card",
            Self::MissingPersonsGrid => "/dev/missing-persons-grid",
            Self::Navbar => "/dev/navbar",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Index => "Component previews",
            Self::MissingPersonCard => "Missing person card",
            Self::MissingPersonsGrid => "Missing persons grid",
            Self::Navbar => "Navbar",
        }
    }
}

/// A page of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    Register,
    Map,
    Report,
    About,
    Sightings,
    MissingPersons,
    Dev(DevPreview),
}

impl Route {
    /// Pages mounted in every build, in declaration order
    pub const PUBLIC: [Route; 8] = [
        Self::Home,
        Self::Login,
        Self::Register,
        Self::Map,
        Self::Report,
        Self::About,
        Self::Sightings,
        Self::MissingPersons,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Map => "/map",
            Self::Report => "/report",
            Self::About => "/about",
            Self::Sightings => "/sightings",
            Self::MissingPersons => "/missing-persons",
            Self::Dev(preview) => preview.path(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Login => "Login",
            Self::Register => "Register",
            Self::Map => "Map",
            Self::Report => "Report",
            Self::About => "About",
            Self::Sightings => "Sightings",
            Self::MissingPersons => "Missing Persons",
            Self::Dev(preview) => preview.title(),
        }
    }

    pub fn is_dev(&self) -> bool {
        matches!(self, Self::Dev(_))
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

impl Serialize for Route {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.path())
    }
}
