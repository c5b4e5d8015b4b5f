use leptos::*;

#[derive(Clone, Copy)]
pub struct MenuState {
    pub open: RwSignal<bool>,
}

impl MenuState {
    pub fn new(open: bool) -> Self {
        Self {
            open: create_rw_signal(open),
        }
    }

    pub fn toggle(&self) -> bool {
        self.open.update(|open| *open = !*open);
        self.open.get_untracked()
    }

    pub fn close(&self) -> bool {
        let was_open = self.open.get_untracked();
        if was_open {
            self.open.set(false);
        }
        was_open
    }

    pub fn is_open(&self) -> bool {
        self.open.get_untracked()
    }
}

pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn fragment_links_yield_their_id() {
        assert_eq!(anchor_target("#features"), Some("features"));
        assert_eq!(anchor_target("#get-started"), Some("get-started"));
    }

    #[test]
    fn bare_hash_and_external_links_have_no_target() {
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("https://archive.org"), None);
        assert_eq!(anchor_target(""), None);
    }

    #[test]
    fn toggle_alternates() {
        with_runtime(|| {
            let menu = MenuState::new(false);
            assert!(menu.toggle());
            assert!(menu.is_open());
            assert!(!menu.toggle());
        });
    }

    #[test]
    fn close_reports_previous_state() {
        with_runtime(|| {
            let menu = MenuState::new(true);
            assert!(menu.close());
            assert!(!menu.is_open());
            assert!(!menu.close());
        });
    }
}
