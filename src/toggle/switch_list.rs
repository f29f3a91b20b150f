//! A list of keyed swipe switches with at most one switched on

use std::{fmt::Debug, time::Duration};
use tracing::debug;

use super::{control::DragToggle, geometry::ToggleConfig};
use crate::error::Result;

/// Receives the key of a switch that was turned on
pub trait Navigator<K> {
    fn navigate(&mut self, key: K);
}

impl<K, F> Navigator<K> for F
where
    F: FnMut(K),
{
    fn navigate(&mut self, key: K) {
        self(key)
    }
}

/// Cards with one switch each, as on the category and place lists.
///
/// Turning a switch on makes its key active, resets every other switch and
/// hands the key to the navigator. Turning it off clears the active key.
#[derive(Debug)]
pub struct SwitchList<K, N> {
    switches: Vec<(K, DragToggle)>,
    active: Option<K>,
    navigator: N,
}

impl<K, N> SwitchList<K, N>
where
    K: Clone + PartialEq + Debug,
    N: Navigator<K>,
{
    pub fn new(keys: impl IntoIterator<Item = K>, config: ToggleConfig, navigator: N) -> Result<Self> {
        let switches = keys
            .into_iter()
            .map(|key| Ok((key, DragToggle::new(config.clone(), false)?)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            switches,
            active: None,
            navigator,
        })
    }

    pub fn active(&self) -> Option<&K> {
        self.active.as_ref()
    }

    pub fn switch(&self, key: &K) -> Option<&DragToggle> {
        self.switches.iter().find(|(k, _)| k == key).map(|(_, toggle)| toggle)
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn gesture_start(&mut self, key: &K) {
        if let Some(toggle) = self.switch_mut(key) {
            toggle.on_gesture_start();
        }
    }

    pub fn gesture_move(&mut self, key: &K, dx: f32) {
        if let Some(toggle) = self.switch_mut(key) {
            toggle.on_gesture_move(dx);
        }
    }

    pub fn gesture_end(&mut self, key: &K, dx: f32) {
        let committed = self.switch_mut(key).and_then(|toggle| toggle.on_gesture_end(dx));
        if let Some(value) = committed {
            self.on_commit(key, value);
        }
    }

    pub fn gesture_cancel(&mut self, key: &K) {
        if let Some(toggle) = self.switch_mut(key) {
            toggle.on_gesture_cancel();
        }
    }

    pub fn tap(&mut self, key: &K) {
        let committed = self.switch_mut(key).and_then(DragToggle::on_tap);
        if let Some(value) = committed {
            self.on_commit(key, value);
        }
    }

    /// Turn every switch off, e.g. when the screen regains focus
    pub fn reset(&mut self) {
        self.active = None;
        for (_, toggle) in &mut self.switches {
            toggle.set_value(false);
        }
    }

    pub fn advance(&mut self, dt: Duration) {
        for (_, toggle) in &mut self.switches {
            toggle.advance(dt);
        }
    }

    fn switch_mut(&mut self, key: &K) -> Option<&mut DragToggle> {
        self.switches.iter_mut().find(|(k, _)| k == key).map(|(_, toggle)| toggle)
    }

    fn on_commit(&mut self, key: &K, value: bool) {
        if !value {
            self.active = None;
            return;
        }

        debug!("Switch {:?} turned on", key);
        for (k, toggle) in &mut self.switches {
            if *k != *key && toggle.value() {
                toggle.set_value(false);
            }
        }
        self.active = Some(key.clone());
        self.navigator.navigate(key.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq)]
    struct Recorder(Vec<&'static str>);

    impl Navigator<&'static str> for Recorder {
        fn navigate(&mut self, key: &'static str) {
            self.0.push(key);
        }
    }

    fn list() -> SwitchList<&'static str, Recorder> {
        SwitchList::new(["parks", "views", "food"], ToggleConfig::default(), Recorder::default()).unwrap()
    }

    #[test]
    fn rising_edge_navigates_and_resets_others() {
        let mut list = list();
        list.tap(&"parks");
        list.gesture_start(&"views");
        list.gesture_end(&"views", 120.0);

        assert_eq!(list.active(), Some(&"views"));
        assert!(!list.switch(&"parks").unwrap().value());
        assert!(list.switch(&"views").unwrap().value());
        assert_eq!(list.navigator().0, vec!["parks", "views"]);
    }

    #[test]
    fn falling_edge_clears_selection_without_navigation() {
        let mut list = list();
        list.tap(&"food");
        list.tap(&"food");

        assert_eq!(list.active(), None);
        assert_eq!(list.navigator().0, vec!["food"]);
    }

    #[test]
    fn short_drag_does_not_navigate() {
        let mut list = list();
        list.gesture_start(&"parks");
        list.gesture_move(&"parks", 20.0);
        list.gesture_end(&"parks", 20.0);

        assert_eq!(list.active(), None);
        assert!(list.navigator().0.is_empty());
    }

    #[test]
    fn reset_turns_everything_off() {
        let mut list = list();
        list.tap(&"views");
        list.reset();
        list.advance(Duration::from_secs(1));

        assert_eq!(list.active(), None);
        let toggle = list.switch(&"views").unwrap();
        assert!(!toggle.value());
        assert_eq!(toggle.knob_position(), toggle.geometry().min_x);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut list = list();
        list.tap(&"museums");
        assert_eq!(list.active(), None);
    }
}
