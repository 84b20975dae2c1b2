//! Operand Forwarding Tests.
//!
//! Priority, highest first: EX/MEM result, MEM/WB result, MEM/WB load,
//! post-WB result, post-WB load, register file.

use pisa_pipe_core::common::{RegId, RegisterFile};
use pisa_pipe_core::core::pipeline::hazards::{forward, forward_operands};
use pisa_pipe_core::core::pipeline::latches::{ExMem, IdEx, MemWb, WbLatch};
use pisa_pipe_core::isa::decode::Operands;
use rstest::rstest;

use crate::common::builder::instruction::*;
use crate::common::harness::{DATA_BASE, TestContext};

const R1: RegId = RegId::new(1);

fn regs_with_r1(val: u32) -> RegisterFile {
    let mut regs = RegisterFile::new();
    regs.write(R1, val);
    regs
}

#[test]
fn ex_beats_mem() {
    let em = ExMem {
        dst_e: Some(R1),
        val_e: 1,
        ..ExMem::default()
    };
    let mw = MemWb {
        dst_e: Some(R1),
        val_e: 2,
        ..MemWb::default()
    };
    assert_eq!(forward(Some(R1), &em, &mw, &WbLatch::default(), &regs_with_r1(9)), 1);
}

#[test]
fn mem_result_beats_mem_load() {
    let mw = MemWb {
        dst_e: Some(R1),
        val_e: 2,
        dst_m: Some(R1),
        val_m: 3,
        ..MemWb::default()
    };
    let v = forward(Some(R1), &ExMem::default(), &mw, &WbLatch::default(), &regs_with_r1(9));
    assert_eq!(v, 2);
}

#[test]
fn mem_load_beats_writeback() {
    let mw = MemWb {
        dst_m: Some(R1),
        val_m: 3,
        ..MemWb::default()
    };
    let wb = WbLatch {
        dst_e: Some(R1),
        val_e: 4,
        ..WbLatch::default()
    };
    assert_eq!(forward(Some(R1), &ExMem::default(), &mw, &wb, &regs_with_r1(9)), 3);
}

#[test]
fn writeback_result_beats_writeback_load() {
    let wb = WbLatch {
        dst_e: Some(R1),
        val_e: 4,
        dst_m: Some(R1),
        val_m: 5,
        ..WbLatch::default()
    };
    let v = forward(Some(R1), &ExMem::default(), &MemWb::default(), &wb, &regs_with_r1(9));
    assert_eq!(v, 4);
}

#[test]
fn writeback_load_is_forwarded() {
    let wb = WbLatch {
        dst_m: Some(R1),
        val_m: 5,
        ..WbLatch::default()
    };
    let v = forward(Some(R1), &ExMem::default(), &MemWb::default(), &wb, &regs_with_r1(9));
    assert_eq!(v, 5);
}

#[test]
fn falls_back_to_register_file() {
    let em = ExMem {
        dst_e: Some(RegId::new(2)),
        val_e: 1,
        ..ExMem::default()
    };
    let v = forward(Some(R1), &em, &MemWb::default(), &WbLatch::default(), &regs_with_r1(9));
    assert_eq!(v, 9);
}

#[test]
fn absent_source_is_zero() {
    let v = forward(None, &ExMem::default(), &MemWb::default(), &WbLatch::default(), &regs_with_r1(9));
    assert_eq!(v, 0);
}

#[test]
fn forward_operands_fills_alu_and_store_data() {
    let mut regs = RegisterFile::new();
    regs.write(RegId::new(6), 60);
    regs.write(RegId::new(7), 70);
    let mut de = IdEx {
        src_a: Some(RegId::new(7)),
        src_b: Some(RegId::new(7)),
        operands: Operands {
            in1: Some(RegId::new(6)),
            in2: Some(RegId::new(7)),
            ..Operands::default()
        },
        ..IdEx::default()
    };
    let em = ExMem {
        dst_e: Some(RegId::new(6)),
        val_e: 66,
        ..ExMem::default()
    };

    forward_operands(&mut de, &em, &MemWb::default(), &WbLatch::default(), &regs);

    assert_eq!((de.alu_a, de.alu_b, de.val_a), (70, 70, 66));
}

// ══════════════════════════════════════════════════════════
// Through the pipeline
// ══════════════════════════════════════════════════════════

#[test]
fn youngest_producer_wins() {
    let mut ctx = TestContext::new().load_program(&[addi(1, 0, 1), addi(1, 0, 2), add(2, 1, 0)]);
    ctx.run(10);
    assert_eq!(ctx.get_reg(2), 2);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(4)]
fn producer_reaches_consumer_at_any_distance(#[case] gap: usize) {
    let mut program = vec![addi(1, 0, 5)];
    program.extend(std::iter::repeat_n(nop(), gap));
    program.push(add(2, 1, 1));

    let mut ctx = TestContext::new().load_program(&program);
    ctx.run(12);
    assert_eq!(ctx.get_reg(2), 10);
    assert_eq!(ctx.cpu().stats.stalls_data, 0);
}

#[test]
fn chain_without_stalls() {
    let mut ctx =
        TestContext::new().load_program(&[addi(1, 0, 5), addi(2, 1, 3), add(3, 2, 1)]);
    ctx.run(8);
    assert_eq!(ctx.get_reg(3), 13);
    assert_eq!(ctx.cpu().stats.instructions_committed, 3);
}

#[test]
fn loaded_value_feeds_store_data() {
    let mut ctx = TestContext::uncached().load_program(&[lw(1, 0, 9), sw(1, 8, 9)]);
    ctx.set_reg(9, DATA_BASE);
    ctx.poke(DATA_BASE, 0xabc);
    ctx.run(10);
    assert_eq!(ctx.peek(DATA_BASE + 8), 0xabc);
}
