use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::color::{Color, Role};
use crate::command::parse_command;
use crate::constants::{MODULE_NAME, SLOT_COUNT};
use crate::edgework::BombInfo;
use crate::layout::Layout;
use crate::pipeline::{Derivation, PipelineSignals, derive};
use crate::rules::TableA;
use crate::session::{Button, PressOutcome, Session};

/// Identifies one module instance in logs. Supplied by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleId(pub u32);

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{MODULE_NAME} #{}", self.0)
    }
}

/// One Quaternions module: setup computed once, then an interactive session.
pub struct Module {
    id: ModuleId,
    layout: Layout,
    table_a: TableA,
    derivation: Derivation,
    session: Session,
}

impl Module {
    /// Run Table A and the pipeline against the bomb and open an unarmed session.
    pub fn new(id: ModuleId, layout: Layout, bomb: &impl BombInfo) -> Self {
        let table_a = TableA::evaluate(&layout, bomb);
        let signals = PipelineSignals::from_bomb(bomb);
        let derivation = derive(&layout, &table_a, &signals);
        let session = Session::new(derivation.answer());

        let module = Self {
            id,
            layout,
            table_a,
            derivation,
            session,
        };
        module.log_setup();
        module
    }

    /// Random layout, then [`Module::new`].
    pub fn generate(id: ModuleId, rng: &mut impl Rng, bomb: &impl BombInfo) -> Self {
        Self::new(id, Layout::random(rng), bomb)
    }

    fn log_setup(&self) {
        let id = self.id;
        let roles = &self.layout.roles;
        tracing::info!(
            module = %id,
            "component colors: real={}, i={}, j={}, k={}",
            roles.color(Role::Real),
            roles.color(Role::I),
            roles.color(Role::J),
            roles.color(Role::K),
        );

        let buttons: Vec<String> = (0..SLOT_COUNT)
            .map(|i| format!("{i}={}", self.layout.buttons.color_of(i)))
            .collect();
        tracing::info!(module = %id, "button colors: {}", buttons.join(", "));
        tracing::info!(
            module = %id,
            "submit button is {}, corresponds to {}",
            self.layout.submit,
            self.derivation.selection,
        );
        tracing::debug!(module = %id, "clear button is {}", self.layout.clear);

        let applicable = self.table_a.applicable(roles);
        if applicable.is_empty() {
            tracing::info!(module = %id, "applicable Table A rules: (none)");
        } else {
            let names: Vec<&str> = applicable.iter().map(|c| c.name()).collect();
            tracing::info!(module = %id, "applicable Table A rules: {}", names.join(", "));
        }

        let d = &self.derivation;
        tracing::info!(module = %id, "q₁ = {}", d.q1);
        tracing::info!(module = %id, "q₂ = {}", d.q2);
        tracing::info!(module = %id, "{} = {}", d.order.label(), d.product);
        tracing::info!(module = %id, "correct answer: {}", d.answer);
    }

    pub fn id(&self) -> ModuleId {
        self.id
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn table_a(&self) -> &TableA {
        &self.table_a
    }

    pub fn derivation(&self) -> &Derivation {
        &self.derivation
    }

    pub fn answer(&self) -> i64 {
        self.derivation.answer()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Color of a button as rendered by the host.
    pub fn button_color(&self, button: Button) -> Option<Color> {
        match button {
            Button::Digit(n) if (n as usize) < SLOT_COUNT => {
                Some(self.layout.buttons.color_of(n as usize))
            }
            Button::Digit(_) => None,
            Button::Clear => Some(self.layout.clear),
            Button::Submit => Some(self.layout.submit),
        }
    }

    pub fn activate(&mut self) {
        self.session.activate();
    }

    pub fn press(&mut self, button: Button) -> PressOutcome {
        let outcome = self.session.press(button);
        tracing::debug!(module = %self.id, ?button, ?outcome, "press");
        outcome
    }

    /// Translate a text command against the current display.
    pub fn process_command(&self, text: &str) -> Option<Vec<Button>> {
        parse_command(text, self.session.input().is_empty())
    }

    /// Translate and apply a text command. `None` leaves the session untouched.
    pub fn run_command(&mut self, text: &str) -> Option<Vec<PressOutcome>> {
        let presses = self.process_command(text)?;
        Some(presses.into_iter().map(|b| self.press(b)).collect())
    }
}
