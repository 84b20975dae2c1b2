//! Execute Stage Semantics.
//!
//! Each program runs through the whole pipeline; results are read from the
//! register file after writeback. With no hazards, instruction `n` commits
//! at the end of cycle `5 + n`.

use pretty_assertions::assert_eq;

use crate::common::builder::instruction::*;
use crate::common::harness::{DATA_BASE, TestContext};

#[test]
fn multu_fills_accumulators_for_move_from() {
    let mut ctx = TestContext::new().load_program(&[multu(1, 2), mfhi(3), mflo(4)]);
    ctx.set_reg(1, u32::MAX);
    ctx.set_reg(2, u32::MAX);
    ctx.run(10);

    assert_eq!(ctx.get_reg(3), 0xffff_fffe);
    assert_eq!(ctx.get_reg(4), 1);
    assert_eq!(ctx.cpu().regs.accumulators(), (0xffff_fffe, 1));
}

#[test]
fn multu_uses_forwarded_operands() {
    let mut ctx =
        TestContext::new().load_program(&[addi(1, 0, 6), addi(2, 0, 7), multu(1, 2), mflo(3)]);
    ctx.run(12);
    assert_eq!(ctx.get_reg(3), 42);
}

#[test]
fn lui_adds_unshifted_immediate() {
    let mut ctx = TestContext::new().load_program(&[lui(1, 0x1234), lui(2, -1)]);
    ctx.run(10);
    assert_eq!(ctx.get_reg(1), 0x1234);
    assert_eq!(ctx.get_reg(2), 0xffff_ffff);
}

#[test]
fn sll_shifts_by_shamt() {
    let mut ctx = TestContext::new().load_program(&[sll(1, 2, 4), sll(3, 2, 31)]);
    ctx.set_reg(2, 3);
    ctx.run(10);
    assert_eq!(ctx.get_reg(1), 48);
    assert_eq!(ctx.get_reg(3), 0x8000_0000);
}

#[test]
fn set_less_than_is_signed() {
    let mut ctx =
        TestContext::new().load_program(&[slt(3, 1, 0), slti(4, 1, -2), slti(5, 0, 1)]);
    ctx.set_reg(1, u32::MAX);
    ctx.run(10);
    assert_eq!(ctx.get_reg(3), 1, "-1 < 0");
    assert_eq!(ctx.get_reg(4), 0, "-1 < -2 is false");
    assert_eq!(ctx.get_reg(5), 1);
}

#[test]
fn logic_immediates() {
    let mut ctx = TestContext::new().load_program(&[andi(1, 2, 0x00ff), ori(3, 2, 0x4000)]);
    ctx.set_reg(2, 0x1234);
    ctx.run(10);
    assert_eq!(ctx.get_reg(1), 0x34);
    assert_eq!(ctx.get_reg(3), 0x5234);
}

#[test]
fn arithmetic_wraps() {
    let mut ctx = TestContext::new().load_program(&[add(3, 1, 2), sub(4, 0, 2), addiu(5, 1, 1)]);
    ctx.set_reg(1, u32::MAX);
    ctx.set_reg(2, 2);
    ctx.run(10);
    assert_eq!(ctx.get_reg(3), 1);
    assert_eq!(ctx.get_reg(4), 0xffff_fffe);
    assert_eq!(ctx.get_reg(5), 0);
}

#[test]
fn store_then_load_round_trips() {
    let mut ctx = TestContext::new().load_program(&[addi(8, 0, 77), sw(8, 4, 9), lw(10, 4, 9)]);
    ctx.set_reg(9, DATA_BASE);
    ctx.run(12);
    assert_eq!(ctx.get_reg(10), 77);
}

#[test]
fn writes_to_r0_are_discarded() {
    let mut ctx = TestContext::new().load_program(&[addi(0, 0, 5), add(1, 0, 0)]);
    ctx.run(10);
    assert_eq!(ctx.get_reg(0), 0);
    assert_eq!(ctx.get_reg(1), 0);
}

#[test]
fn unknown_opcode_commits_without_effect() {
    let mut ctx = TestContext::new().load_program(&[unknown(0xee), addi(1, 0, 1)]);
    ctx.run(10);
    assert_eq!(ctx.get_reg(1), 1);
    assert_eq!(ctx.cpu().stats.instructions_committed, 2);
}
