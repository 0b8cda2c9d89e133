//! End-to-end checks of the scoped override discipline against a host that
//! records every call.

use lacquer::prelude::*;
use serial_test::serial;

/// A host wrapper that counts pushes and pops to verify the guards balance.
struct CountingHost {
    inner: MemoryStyleTable,
    pushes: usize,
    pops: usize,
}

impl CountingHost {
    fn new() -> Self {
        Self {
            inner: MemoryStyleTable::new(),
            pushes: 0,
            pops: 0,
        }
    }
}

impl StyleHost for CountingHost {
    fn color(&self, slot: StyleSlot) -> Color {
        self.inner.color(slot)
    }

    fn set_color(&mut self, slot: StyleSlot, color: Color) {
        self.inner.set_color(slot, color);
    }

    fn push_color(&mut self, slot: StyleSlot, color: Color) {
        self.pushes += 1;
        self.inner.push_color(slot, color);
    }

    fn pop_colors(&mut self, count: usize) {
        self.pops += count;
        self.inner.pop_colors(count);
    }
}

#[test]
#[serial]
fn scoped_theme_balances_pushes_and_pops() {
    let mut host = CountingHost::new();
    {
        let scope = ScopedTheme::new(&mut host, palette::semantic::ERROR);
        assert_eq!(scope.len(), StyleSlot::COUNT);
    }
    assert_eq!(host.pushes, StyleSlot::COUNT);
    assert_eq!(host.pops, host.pushes);
    assert_eq!(host.inner.stack_depth(), 0);
}

#[test]
#[serial]
fn nested_scopes_leave_the_applied_theme_intact() {
    let mut host = CountingHost::new();
    apply(&mut host, palette::semantic::NORMAL);
    let baseline: Vec<Color> = StyleSlot::ALL.iter().map(|s| host.color(*s)).collect();

    {
        let mut outer = ScopedTheme::new(&mut host, palette::semantic::WARNING);
        {
            let _inner = ScopedColor::button(outer.host(), palette::CORAL);
        }
    }

    let after: Vec<Color> = StyleSlot::ALL.iter().map(|s| host.color(*s)).collect();
    assert_eq!(baseline, after);
    assert_eq!(host.pushes, StyleSlot::COUNT + 1);
    assert_eq!(host.pops, host.pushes);
}

#[test]
#[serial]
fn disabled_scope_is_fully_reversible_too() {
    let mut host = CountingHost::new();
    apply(&mut host, palette::semantic::NORMAL);
    let text_before = host.color(StyleSlot::Text);

    {
        let _scope = ScopedTheme::disabled(&mut host, palette::semantic::NORMAL);
    }

    assert_eq!(host.color(StyleSlot::Text), text_before);
    assert_eq!(host.inner.stack_depth(), 0);
}
