//! Hazard & Branch Controller Tests.
//!
//! `pipeline_control` is driven directly on hand-built latches.

use pisa_pipe_core::common::RegId;
use pisa_pipe_core::core::pipeline::control::{ControlState, pipeline_control};
use pisa_pipe_core::core::pipeline::latches::{IdEx, IfId, Latches};
use pisa_pipe_core::core::pipeline::signals::{COND_JUMP, COND_TAKEN};
use pisa_pipe_core::stats::SimStats;
use pretty_assertions::assert_eq;

use crate::common::builder::instruction::{add, jump, lw};

const PC: u32 = 0x0040_0010;

fn in_decode(inst: pisa_pipe_core::isa::Instruction) -> Latches {
    Latches {
        id_ex: IdEx {
            inst,
            pc: PC,
            opcode: inst.opcode(),
            ..IdEx::default()
        },
        ..Latches::default()
    }
}

#[test]
fn taken_branch_squashes_decode_slot() {
    let mut control = ControlState {
        flag: true,
        cond: COND_TAKEN,
        ..ControlState::default()
    };
    let mut latches = in_decode(add(3, 1, 2));
    let mut stats = SimStats::default();

    pipeline_control(&mut control, &mut latches, &mut stats);

    assert_eq!(latches.id_ex, IdEx::default());
    assert_eq!(control, ControlState::default());
    assert_eq!(stats.squashes, 1);
}

#[test]
fn squash_releases_load_destination() {
    let r4 = RegId::new(4);
    let mut control = ControlState {
        flag: true,
        cond: COND_TAKEN,
        ..ControlState::default()
    };
    control.regs.insert(r4);
    let mut latches = in_decode(lw(4, 0, 5));
    latches.id_ex.dst_m = Some(r4);
    latches.id_ex.mem_read = true;
    let mut stats = SimStats::default();

    pipeline_control(&mut control, &mut latches, &mut stats);

    assert!(!control.regs.contains(r4));
    assert!(control.regs.is_empty());
}

#[test]
fn squash_cancels_pending_stall() {
    let mut control = ControlState {
        stall: true,
        flag: true,
        cond: COND_TAKEN,
        ..ControlState::default()
    };
    let mut latches = in_decode(add(3, 1, 2));
    let before_if = IfId {
        inst: add(9, 9, 9),
        pc: 0x0040_0100,
        npc: 0x0040_0108,
    };
    latches.if_id = before_if;
    let mut stats = SimStats::default();

    pipeline_control(&mut control, &mut latches, &mut stats);

    assert!(!control.stall);
    assert_eq!(latches.if_id, before_if, "no replay of a squashed instruction");
}

#[test]
fn squashing_a_bubble_is_not_counted() {
    let mut control = ControlState {
        flag: true,
        cond: COND_TAKEN,
        ..ControlState::default()
    };
    let mut latches = Latches::default();
    let mut stats = SimStats::default();

    pipeline_control(&mut control, &mut latches, &mut stats);
    assert_eq!(stats.squashes, 0);
}

#[test]
fn jump_only_clears_branch_state() {
    let mut control = ControlState {
        flag: true,
        cond: COND_JUMP,
        ..ControlState::default()
    };
    let mut latches = in_decode(jump(0x0040_0800));
    let before = latches;
    let mut stats = SimStats::default();

    pipeline_control(&mut control, &mut latches, &mut stats);

    assert_eq!(latches, before);
    assert!(!control.flag);
    assert_eq!(control.cond, 0);
    assert_eq!(stats.squashes, 0);
}

#[test]
fn stall_replays_decode_into_fetch_latch() {
    let mut control = ControlState {
        stall: true,
        ..ControlState::default()
    };
    let inst = add(5, 4, 1);
    let mut latches = in_decode(inst);
    let mut stats = SimStats::default();

    pipeline_control(&mut control, &mut latches, &mut stats);

    assert_eq!(
        latches.if_id,
        IfId {
            inst,
            pc: PC,
            npc: PC + 8,
        }
    );
    assert_eq!(latches.id_ex, IdEx::default());
    assert!(control.stall, "decode clears the stall once the hazard resolves");
}

#[test]
fn idle_control_leaves_latches_alone() {
    let mut control = ControlState::default();
    let mut latches = in_decode(add(1, 2, 3));
    let before = latches;
    let mut stats = SimStats::default();

    pipeline_control(&mut control, &mut latches, &mut stats);
    assert_eq!(latches, before);
}
