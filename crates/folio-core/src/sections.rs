/// Page sections addressable by fragment identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Experience,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Experience,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    /// Sections listed in the navigation bar.
    pub const NAV: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Experience => "experience",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Experience => "Experience",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.id())
    }

    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.id() == id)
    }

    /// Parses `"#projects"` (or a full URL ending in a fragment).
    pub fn from_href(href: &str) -> Option<Section> {
        let (_, fragment) = href.rsplit_once('#')?;
        Section::from_id(fragment)
    }
}

/// Fragment target of an in-page link, if any. Used for anchors that are not
/// one of the known sections.
pub fn fragment_target(href: &str) -> Option<&str> {
    href.rsplit_once('#')
        .map(|(_, id)| id)
        .filter(|id| !id.is_empty())
}
