//! Navigation state machine
//!
//! Exactly one view is active at any time; the tagged enum makes that
//! mutual exclusion structural rather than a convention callers must
//! maintain by clearing flags. There is no history stack: "back" always
//! means "return to Home", never "return to previous state".

/// Delay before the footer-navigation smooth scroll fires, giving the
/// home view time to mount its section anchors
pub const FOOTER_SCROLL_DELAY_MS: u64 = 100;

/// Named sections of the home view reachable from the footer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeSection {
    Home,
    Pillars,
    Chapters,
    Partners,
    Founders,
}

impl HomeSection {
    /// Anchor identifier the front end scrolls to
    pub fn anchor(&self) -> &'static str {
        match self {
            HomeSection::Home => "home",
            HomeSection::Pillars => "pillars",
            HomeSection::Chapters => "chapters",
            HomeSection::Partners => "partners",
            HomeSection::Founders => "founders",
        }
    }
}

/// The single active view
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    ChapterDetail(String),
    PillarDetail(String),
    Donate,
    Dashboard,
}

/// Scroll side effect mandated by a transition
///
/// The state machine only reports what the contract requires; the front
/// end executes it. No transition is cancellable once triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollCommand {
    /// Reset scroll position to the top immediately
    ResetTop,
    /// After `FOOTER_SCROLL_DELAY_MS`, smooth-scroll to the section
    /// anchor, or to the top when the target is the home anchor itself
    SmoothToSection(HomeSection),
}

/// Navigation state machine mediating between views
#[derive(Debug, Default)]
pub struct NavState {
    view: View,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn is_home(&self) -> bool {
        self.view == View::Home
    }

    pub fn selected_chapter(&self) -> Option<&str> {
        match &self.view {
            View::ChapterDetail(id) => Some(id),
            _ => None,
        }
    }

    pub fn selected_pillar(&self) -> Option<&str> {
        match &self.view {
            View::PillarDetail(id) => Some(id),
            _ => None,
        }
    }

    pub fn donate_open(&self) -> bool {
        self.view == View::Donate
    }

    /// Select a chapter, clearing any selected pillar and closing the
    /// donate page
    pub fn select_chapter(&mut self, id: impl Into<String>) -> ScrollCommand {
        self.view = View::ChapterDetail(id.into());
        ScrollCommand::ResetTop
    }

    /// Select a pillar, clearing any selected chapter and closing the
    /// donate page
    pub fn select_pillar(&mut self, id: impl Into<String>) -> ScrollCommand {
        self.view = View::PillarDetail(id.into());
        ScrollCommand::ResetTop
    }

    /// Open the donate page, clearing selections
    pub fn open_donate(&mut self) -> ScrollCommand {
        self.view = View::Donate;
        ScrollCommand::ResetTop
    }

    /// "Back to home" / logo click: return to Home, clearing everything
    pub fn back_home(&mut self) -> ScrollCommand {
        self.view = View::Home;
        ScrollCommand::ResetTop
    }

    /// Footer navigation: return to Home first, then smooth-scroll to
    /// the target section after the mount delay
    pub fn navigate_section(&mut self, section: HomeSection) -> ScrollCommand {
        self.view = View::Home;
        ScrollCommand::SmoothToSection(section)
    }

    /// Successful login supersedes every other state
    pub fn enter_dashboard(&mut self) -> ScrollCommand {
        self.view = View::Dashboard;
        ScrollCommand::ResetTop
    }

    /// Logout returns to Home
    pub fn leave_dashboard(&mut self) -> ScrollCommand {
        self.view = View::Home;
        ScrollCommand::ResetTop
    }
}
