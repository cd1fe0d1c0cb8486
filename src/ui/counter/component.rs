use std::fmt;

use crate::ui::counter::intent::CounterIntent;
use crate::ui::counter::reducer::CounterReducer;
use crate::ui::counter::state::CounterState;
use crate::ui::counter::view::{self, ViewTree};
use crate::ui::mvi::dispatch;

type RenderObserver = Box<dyn FnMut(&ViewTree)>;

/// The counter component.
///
/// Owns its state cell. Every dispatched action reduces the state and then
/// re-renders synchronously, so [`view`](Self::view) always matches
/// [`value`](Self::value) by the time a handler returns.
pub struct CounterView {
    state: CounterState,
    view: ViewTree,
    renders: u64,
    observer: Option<RenderObserver>,
}

impl CounterView {
    /// Create a component with `value = 0` and render it once.
    pub fn mount() -> Self {
        Self::mount_inner(None)
    }

    /// Like [`mount`](Self::mount), with a callback that receives every
    /// rendered tree, starting with the initial one.
    pub fn mount_with<F>(observer: F) -> Self
    where
        F: FnMut(&ViewTree) + 'static,
    {
        Self::mount_inner(Some(Box::new(observer)))
    }

    fn mount_inner(observer: Option<RenderObserver>) -> Self {
        let state = CounterState::default();
        let mut counter = Self {
            view: view::build(&state),
            state,
            renders: 0,
            observer,
        };
        counter.commit_render();
        tracing::debug!("counter mounted");
        counter
    }

    pub fn on_increment_clicked(&mut self) {
        self.dispatch(CounterIntent::Increment);
    }

    pub fn on_reset_clicked(&mut self) {
        self.dispatch(CounterIntent::Reset);
    }

    pub fn dispatch(&mut self, intent: CounterIntent) {
        let changed = dispatch::<CounterReducer>(&mut self.state, intent);
        tracing::debug!(%intent, value = self.state.value(), changed, "counter action");
        self.view = self.render();
        self.commit_render();
    }

    /// Pure derivation of the view from the current value.
    pub fn render(&self) -> ViewTree {
        view::build(&self.state)
    }

    pub fn value(&self) -> i64 {
        self.state.value()
    }

    /// The most recently rendered tree.
    pub fn view(&self) -> &ViewTree {
        &self.view
    }

    pub fn displayed_text(&self) -> &str {
        self.view.paragraph().unwrap_or_default()
    }

    pub fn render_count(&self) -> u64 {
        self.renders
    }

    fn commit_render(&mut self) {
        self.renders += 1;
        tracing::trace!(renders = self.renders, text = self.displayed_text(), "render");
        if let Some(observer) = self.observer.as_mut() {
            observer(&self.view);
        }
    }
}

impl fmt::Debug for CounterView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CounterView")
            .field("state", &self.state)
            .field("renders", &self.renders)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn mount_renders_once() {
        let counter = CounterView::mount();
        assert_eq!(counter.value(), 0);
        assert_eq!(counter.render_count(), 1);
        assert_eq!(counter.displayed_text(), "Count: 0");
    }

    #[test]
    fn each_action_renders() {
        let mut counter = CounterView::mount();
        counter.on_increment_clicked();
        counter.on_reset_clicked();
        counter.on_reset_clicked();
        assert_eq!(counter.render_count(), 4);
    }

    #[test]
    fn observer_sees_initial_frame() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _counter = CounterView::mount_with(move |view| {
            sink.borrow_mut().push(view.paragraph().map(str::to_string));
        });
        assert_eq!(*seen.borrow(), vec![Some("Count: 0".to_string())]);
    }

    #[test]
    fn render_does_not_count_as_a_render_commit() {
        let counter = CounterView::mount();
        let _ = counter.render();
        let _ = counter.render();
        assert_eq!(counter.render_count(), 1);
    }
}
