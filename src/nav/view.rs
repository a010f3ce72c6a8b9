use std::fmt;
use std::rc::Rc;

use crate::domain::events::KeyInput;

use super::mediator::UiEvent;

/// A self-contained unit of screen content. Views populate themselves at
/// construction (controller calls happen there) and stay toolkit-agnostic:
/// the UI layer turns [`ViewContent`] into widgets.
pub trait View {
    fn content(&self) -> ViewContent;

    /// Reacts to a key the shell forwarded. Returned requests are applied
    /// by the shell in order.
    fn handle_key(&mut self, key: &KeyInput) -> Vec<NavRequest>;
}

/// Deferred producer of a view. The stack stores producers rather than built
/// instances so that returning to a previous view re-runs its data fetch.
pub type ViewProducer = Rc<dyn Fn() -> Box<dyn View>>;

pub fn producer<V, F>(build: F) -> ViewProducer
where
    V: View + 'static,
    F: Fn() -> V + 'static,
{
    Rc::new(move || Box::new(build()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewContent {
    pub title: String,
    pub lines: Vec<ContentLine>,
}

impl ViewContent {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    pub fn push(&mut self, line: ContentLine) {
        self.lines.push(line);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentLine {
    Heading(String),
    Entry { text: String, selected: bool },
    Note(String),
    Blank,
}

/// The narrow contract a view uses to drive its shell. Views never hold the
/// stack or the registry; they hand requests back instead.
pub enum NavRequest {
    Open {
        producer: ViewProducer,
        keep_return_point: bool,
    },
    Back,
    Home,
    Publish(UiEvent),
}

impl NavRequest {
    pub fn open(producer: ViewProducer) -> Self {
        Self::Open {
            producer,
            keep_return_point: true,
        }
    }
}

impl fmt::Debug for NavRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open {
                keep_return_point, ..
            } => f
                .debug_struct("Open")
                .field("keep_return_point", keep_return_point)
                .finish_non_exhaustive(),
            Self::Back => write!(f, "Back"),
            Self::Home => write!(f, "Home"),
            Self::Publish(event) => f.debug_tuple("Publish").field(event).finish(),
        }
    }
}
