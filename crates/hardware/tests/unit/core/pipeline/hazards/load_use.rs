//! Load-Use Hazard Tests.
//!
//! Covers the in-flight register set, the stall decision, and the observable
//! pipeline behaviour around a stall: exactly one lost cycle and no lost or
//! duplicated instruction.

use pisa_pipe_core::common::RegId;
use pisa_pipe_core::core::pipeline::hazards::{InFlightRegs, need_stall};
use pisa_pipe_core::isa::decode::Operands;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::builder::instruction::*;
use crate::common::harness::{DATA_BASE, TestContext, pc_of};

fn r(n: u8) -> Option<RegId> {
    Some(RegId::new(n))
}

// ══════════════════════════════════════════════════════════
// 1. In-flight set
// ══════════════════════════════════════════════════════════

#[test]
fn in_flight_insert_remove() {
    let mut set = InFlightRegs::default();
    assert!(set.is_empty());

    set.insert(RegId::new(4));
    set.insert(RegId::new(31));
    assert!(set.contains(RegId::new(4)));
    assert!(!set.contains(RegId::new(5)));
    assert_eq!(set.bits(), (1 << 4) | (1 << 31));

    set.remove(RegId::new(4));
    set.remove(RegId::new(4));
    assert!(!set.contains(RegId::new(4)));
    assert!(set.contains(RegId::new(31)));
}

#[test]
fn in_flight_tracks_accumulators() {
    let mut set = InFlightRegs::default();
    set.insert(RegId::LO);
    assert!(set.contains(RegId::LO));
    assert!(!set.contains(RegId::HI));
}

// ══════════════════════════════════════════════════════════
// 2. Stall decision
// ══════════════════════════════════════════════════════════

#[rstest]
#[case::in1_pending(r(1), None, None, false, true)]
#[case::in2_pending(r(2), r(1), None, false, true)]
#[case::no_overlap(r(2), r(3), r(4), false, false)]
#[case::load_dest_pending(r(2), None, r(1), true, true)]
#[case::alu_dest_pending(r(2), None, r(1), false, false)]
fn stall_decision(
    #[case] in1: Option<RegId>,
    #[case] in2: Option<RegId>,
    #[case] out1: Option<RegId>,
    #[case] is_load: bool,
    #[case] expected: bool,
) {
    let mut pending = InFlightRegs::default();
    pending.insert(RegId::new(1));
    let ops = Operands {
        in1,
        in2,
        out1,
        ..Operands::default()
    };
    assert_eq!(need_stall(&ops, is_load, pending), expected);
}

#[test]
fn empty_set_never_stalls() {
    let ops = Operands {
        in1: r(1),
        in2: r(2),
        out1: r(3),
        ..Operands::default()
    };
    assert!(!need_stall(&ops, true, InFlightRegs::default()));
}

// ══════════════════════════════════════════════════════════
// 3. Through the pipeline
// ══════════════════════════════════════════════════════════

#[test]
fn load_use_costs_exactly_one_cycle() {
    // ADD r1,r2,r3 ; LW r4,0(r1) ; ADD r5,r4,r1
    let mut ctx = TestContext::new().load_program(&[add(1, 2, 3), lw(4, 0, 1), add(5, 4, 1)]);
    ctx.set_reg(2, DATA_BASE);
    ctx.set_reg(3, 0x100);
    ctx.poke(DATA_BASE + 0x100, 42);

    // Three instructions plus one bubble: the last commits in cycle 8.
    ctx.run(7);
    assert_eq!(ctx.get_reg(5), 0);
    ctx.run(1);

    assert_eq!(ctx.get_reg(4), 42);
    assert_eq!(ctx.get_reg(5), 42 + DATA_BASE + 0x100);
    assert_eq!(ctx.cpu().stats.stalls_data, 1);
    assert_eq!(ctx.cpu().stats.instructions_committed, 3);
    assert!(ctx.cpu().control.regs.is_empty());
}

#[test]
fn stalled_instruction_is_held_then_replayed() {
    let consumer = add(3, 1, 1);
    let mut ctx = TestContext::new().load_program(&[lw(1, 0, 2), consumer, addi(4, 0, 7)]);
    ctx.set_reg(2, DATA_BASE);
    ctx.poke(DATA_BASE, 21);

    // Cycle 3: the load is in execute and the consumer stalls in decode.
    ctx.run(3);
    let l = ctx.cpu().latches;
    assert!(ctx.cpu().control.stall);
    assert_eq!((l.if_id.inst, l.if_id.pc), (consumer, pc_of(1)));

    // Cycle 4: the consumer is re-decoded and fetch moves on.
    ctx.run(1);
    let l = ctx.cpu().latches;
    assert!(!ctx.cpu().control.stall);
    assert_eq!((l.id_ex.inst, l.id_ex.pc), (consumer, pc_of(1)));
    assert_eq!(l.if_id.pc, pc_of(2));

    ctx.run(6);
    assert_eq!(ctx.get_reg(3), 42);
    assert_eq!(ctx.get_reg(4), 7);
    assert_eq!(ctx.cpu().stats.instructions_committed, 3);
}

#[test]
fn back_to_back_loads_to_one_register_stall() {
    let mut ctx = TestContext::new().load_program(&[lw(1, 0, 2), lw(1, 4, 2), add(3, 1, 0)]);
    ctx.set_reg(2, DATA_BASE);
    ctx.poke(DATA_BASE, 1);
    ctx.poke(DATA_BASE + 4, 2);
    ctx.run(14);

    assert_eq!(ctx.get_reg(3), 2, "the younger load wins");
    assert_eq!(ctx.cpu().stats.stalls_data, 2);
}

#[test]
fn independent_instruction_after_load_does_not_stall() {
    let mut ctx = TestContext::new().load_program(&[lw(1, 0, 2), add(3, 4, 5)]);
    ctx.set_reg(2, DATA_BASE);
    ctx.run(8);
    assert_eq!(ctx.cpu().stats.stalls_data, 0);
}

#[test]
fn one_instruction_gap_hides_load_latency() {
    let mut ctx = TestContext::new().load_program(&[lw(1, 0, 2), nop(), add(3, 1, 1)]);
    ctx.set_reg(2, DATA_BASE);
    ctx.poke(DATA_BASE, 4);
    ctx.run(10);
    assert_eq!(ctx.get_reg(3), 8);
    assert_eq!(ctx.cpu().stats.stalls_data, 0);
}
