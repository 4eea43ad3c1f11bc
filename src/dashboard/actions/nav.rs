use crate::dashboard::types::Dashboard;
use crate::page::Section;

impl Dashboard {
    pub fn toggle_nav(&mut self) {
        if let Some(nav) = self.page.nav.as_mut() {
            nav.toggle_active = !nav.toggle_active;
            nav.open = !nav.open;
            if nav.open {
                nav.highlighted = Section::ALL.iter().position(|s| *s == self.section).unwrap_or(0);
            }
        }
        self.needs_clear = true;
    }

    /// Jump to a section; an open menu closes behind the link
    pub fn follow_nav_link(&mut self, section: Section) {
        if let Some(nav) = self.page.nav.as_mut() {
            if nav.open {
                nav.open = false;
                nav.toggle_active = false;
                self.needs_clear = true;
            }
        }
        self.section = section;
    }

    pub fn nav_highlight(&mut self, down: bool) {
        if let Some(nav) = self.page.nav.as_mut() {
            let len = Section::ALL.len();
            nav.highlighted = if down {
                (nav.highlighted + 1) % len
            } else {
                (nav.highlighted + len - 1) % len
            };
        }
    }

    pub fn highlighted_section(&self) -> Option<Section> {
        self.page
            .nav
            .as_ref()
            .and_then(|nav| Section::ALL.get(nav.highlighted).copied())
    }
}
