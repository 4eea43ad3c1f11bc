use crate::api::PoolId;
use crate::dashboard::types::{ControlId, Dashboard, EventKind, SimField};
use crate::render;
use crate::simulator::simulator_view;

impl Dashboard {
    /// Recompute the projection from whatever the form holds right now
    pub fn update_simulator(&mut self) {
        let form = &self.page.simulator;
        let view = simulator_view(self.state.staking_data(), &form.amount, &form.days, &form.pool);
        render::apply_simulator(&mut self.page, &view);
    }

    /// Type into the focused simulator field. Each keystroke is an input event.
    pub fn sim_input_char(&mut self, c: char) {
        match self.sim_field {
            SimField::Amount if c.is_ascii_digit() || c == '.' || c == '-' => {
                self.page.simulator.amount.push(c);
                self.dispatch(ControlId::SimAmount, EventKind::Input);
            }
            SimField::Days if c.is_ascii_digit() => {
                self.page.simulator.days.push(c);
                self.dispatch(ControlId::SimDays, EventKind::Input);
            }
            _ => {}
        }
    }

    pub fn sim_backspace(&mut self) {
        match self.sim_field {
            SimField::Amount => {
                self.page.simulator.amount.pop();
                self.dispatch(ControlId::SimAmount, EventKind::Input);
            }
            SimField::Days => {
                self.page.simulator.days.pop();
                self.dispatch(ControlId::SimDays, EventKind::Input);
            }
            SimField::Pool => {}
        }
    }

    /// Step the pool select forwards or backwards
    pub fn sim_cycle_pool(&mut self, forward: bool) {
        let current = self.page.simulator.pool.parse::<PoolId>().unwrap_or(PoolId::Flexible);
        let next = if forward { current.next() } else { current.prev() };
        self.page.simulator.pool = next.as_str().to_string();
        self.dispatch(ControlId::SimPool, EventKind::Change);
    }
}
