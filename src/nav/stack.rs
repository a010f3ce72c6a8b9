use super::view::{View, ViewProducer};

struct DisplayedView {
    producer: ViewProducer,
    view: Box<dyn View>,
}

/// LIFO sequence of deferred view producers backing one shell window.
///
/// The currently displayed view is held outside the stack; the stack itself
/// only ever contains return points. Popped entries are re-materialized from
/// their producer, so a restored view reflects state changed while away.
#[derive(Default)]
pub struct ViewStack {
    current: Option<DisplayedView>,
    stack: Vec<ViewProducer>,
}

impl ViewStack {
    /// Materializes a view from `producer` and displays it. With
    /// `add_to_stack` the previous display becomes a return point; without
    /// it the display is replaced in place (used for home resets, where
    /// "back" to the prior page would be invalid).
    pub fn navigate_to(&mut self, producer: ViewProducer, add_to_stack: bool) {
        let view = producer();

        if add_to_stack {
            if let Some(previous) = self.current.take() {
                self.stack.push(previous.producer);
            }
        }

        tracing::debug!(
            title = %view.content().title,
            add_to_stack,
            depth = self.stack.len(),
            "navigate"
        );
        self.current = Some(DisplayedView { producer, view });
    }

    /// Restores the most recent return point. A no-op when the stack is
    /// empty; never an error.
    pub fn navigate_back(&mut self) {
        let Some(producer) = self.stack.pop() else {
            tracing::debug!("back requested with empty view stack, ignoring");
            return;
        };

        let view = producer();
        tracing::debug!(
            title = %view.content().title,
            depth = self.stack.len(),
            "navigate back"
        );
        self.current = Some(DisplayedView { producer, view });
    }

    pub fn can_navigate_back(&self) -> bool {
        !self.stack.is_empty()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn current_view(&self) -> Option<&dyn View> {
        self.current.as_ref().map(|entry| entry.view.as_ref())
    }

    pub fn current_view_mut(&mut self) -> Option<&mut dyn View> {
        self.current.as_mut().map(|entry| entry.view.as_mut() as &mut dyn View)
    }
}
