//! Integration tests exercising full module setup and play:
//! layout → Table A → pipeline → session, through the public API.

use quat_core::{
    Button, ButtonAssignment, Edgework, Layout, MAX_INPUT_LEN, Module, ModuleId, Phase,
    Port, PressOutcome, ProductOrder, Quaternion, RoleAssignment, SubmitOutcome, TableA,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use quat_core::Color::*;

fn scenario_bomb() -> Edgework {
    Edgework {
        serial: "AB1C23".into(),
        lit_indicators: vec![],
        unlit_indicators: vec!["FRK".into()],
        batteries: 2,
        ports: vec![Port::Parallel],
    }
}

fn scenario_layout() -> Layout {
    Layout::new(
        RoleAssignment::new([Red, Green, Blue, Yellow]).unwrap(),
        ButtonAssignment::from_slots([
            Red, Yellow, Green, Red, White, Blue, Yellow, White, Green, Blue,
        ])
        .unwrap(),
        White,
        Yellow,
    )
}

/// The documented walkthrough, stage by stage, ending in a solve.
#[test]
fn end_to_end_scenario() {
    let mut module = Module::new(ModuleId(1), scenario_layout(), &scenario_bomb());

    let d = module.derivation();
    assert_eq!(d.initial, [10, 8, 9, 6, 3, 2, 5, 1]);
    assert_eq!(d.swapped, [10, 8, 5, 1, 3, 2, 9, 6]);
    assert_eq!(d.inverted, [10, 8, 5, -1, -3, -2, 9, 6]);
    assert_eq!(d.q1, Quaternion::new(10, -8, -5, 1));
    assert_eq!(d.q2, Quaternion::new(-3, -2, 9, 6));
    assert_eq!(d.order, ProductOrder::Q2Q1);
    assert_eq!(d.product, Quaternion::new(-7, 43, 59, 139));
    assert_eq!(module.answer(), 24700);

    module.activate();
    for n in [2, 4, 7, 0, 0] {
        assert_eq!(module.press(Button::Digit(n)), PressOutcome::Entered);
    }
    assert_eq!(
        module.press(Button::Submit),
        PressOutcome::Submitted(SubmitOutcome::Correct)
    );
    assert_eq!(module.session().phase(), Phase::Solved);
    assert_eq!(module.press(Button::Digit(1)), PressOutcome::Ignored);
}

/// A wrong guess strikes without touching the display, then the right one solves.
#[test]
fn strike_then_solve() {
    let mut module = Module::new(ModuleId(4), scenario_layout(), &scenario_bomb());
    module.activate();

    let outcomes = module.run_command("press 24701").unwrap();
    assert_eq!(
        outcomes.last(),
        Some(&PressOutcome::Submitted(SubmitOutcome::Strike))
    );
    assert_eq!(module.session().input(), "24701");
    assert_eq!(module.session().phase(), Phase::Armed);

    module.run_command("24700").unwrap();
    assert!(module.session().is_solved());
    assert_eq!(module.session().strikes(), 1);
}

/// Edgework changes flow through Table A and the pipeline.
#[test]
fn edgework_drives_answer() {
    let mut bomb = scenario_bomb();
    bomb.ports.push(Port::Ps2);
    bomb.batteries = 3;
    bomb.lit_indicators.push("BOB".into());

    let module = Module::new(ModuleId(2), scenario_layout(), &bomb);
    assert_eq!(
        *module.table_a(),
        TableA {
            red: false,
            green: true,
            blue: true,
            yellow: true
        }
    );
    let d = module.derivation();
    // Green (i) now swaps as well.
    assert_eq!(d.swapped, [10, 2, 5, 1, 3, 8, 9, 6]);
    assert_eq!(d.inverted, [10, -2, 5, -1, -3, 8, 9, 6]);
    assert!(!d.q1_conjugated);
    assert_eq!(d.order, ProductOrder::Q1Q2);
    assert_eq!(d.product, d.q1 * d.q2);
    assert_eq!(module.answer(), d.q1.squared_norm() * d.q2.squared_norm());
}

/// Seeded layouts are reproducible and every generated answer is enterable.
#[test]
fn generated_modules_are_solvable() {
    let bomb = scenario_bomb();
    for seed in 0..200u64 {
        let a = Module::generate(ModuleId(1), &mut SmallRng::seed_from_u64(seed), &bomb);
        let b = Module::generate(ModuleId(1), &mut SmallRng::seed_from_u64(seed), &bomb);
        assert_eq!(a.layout(), b.layout());
        assert_eq!(a.answer(), b.answer());

        let text = a.answer().to_string();
        assert!(text.len() <= MAX_INPUT_LEN, "answer {text} too long");

        let mut module = a;
        module.activate();
        module.run_command(&format!("submit {text}")).unwrap();
        assert!(module.session().is_solved(), "seed {seed} answer {text}");
    }
}
