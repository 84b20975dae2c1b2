//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the entries carried across the five stage boundaries:
//! IF/ID → ID/EX → EX/MEM → MEM/WB → post-WB.
//!
//! 1. **Instruction Flow:** Each latch holds exactly one instruction per cycle;
//!    `NOP` is a valid, inert occupant.
//! 2. **Bubbles:** A bubble is the `Default` entry, with no destinations, so it
//!    never matches in forwarding and performs no side effects.
//! 3. **Double Buffering:** [`Latches`] groups one entry per boundary; the cycle
//!    loop reads a current set and writes a next set.

use crate::common::RegId;
use crate::common::constants::INSTRUCTION_SIZE;
use crate::core::pipeline::signals::AluOp;
use crate::isa::decode::Operands;
use crate::isa::{InstFlags, Instruction};

/// Entry in the IF/ID latch (Fetch to Decode).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct IfId {
    /// Fetched instruction.
    pub inst: Instruction,
    /// Program counter of the instruction.
    pub pc: u32,
    /// Sequential next PC (`pc + 8`).
    pub npc: u32,
}

/// Entry in the ID/EX latch (Decode to Execute).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct IdEx {
    /// Decoded instruction.
    pub inst: Instruction,
    /// Program counter of the instruction.
    pub pc: u32,
    /// Primary opcode.
    pub opcode: u8,
    /// Instruction-class flags from the decode table.
    pub flags: InstFlags,
    /// Resolved register operands.
    pub operands: Operands,
    /// ALU function to apply in execute.
    pub func: AluOp,
    /// Forwarding source for ALU operand A.
    pub src_a: Option<RegId>,
    /// Forwarding source for ALU operand B.
    pub src_b: Option<RegId>,
    /// Forwarded value of `src_a`.
    pub alu_a: u32,
    /// Forwarded value of `src_b`.
    pub alu_b: u32,
    /// Forwarded value of `in1` (store data).
    pub val_a: u32,
    /// Destination written from the ALU result.
    pub dst_e: Option<RegId>,
    /// Destination written from the loaded value.
    pub dst_m: Option<RegId>,
    /// Instruction reads memory.
    pub mem_read: bool,
    /// Instruction writes memory.
    pub mem_write: bool,
    /// Branch or jump target computed in decode.
    pub target: u32,
}

/// Entry in the EX/MEM latch (Execute to Memory).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct ExMem {
    /// Executed instruction.
    pub inst: Instruction,
    /// Program counter of the instruction.
    pub pc: u32,
    /// ALU result (effective address for memory operations).
    pub val_e: u32,
    /// Store data.
    pub val_a: u32,
    /// Destination written from the ALU result.
    pub dst_e: Option<RegId>,
    /// Destination written from the loaded value.
    pub dst_m: Option<RegId>,
    /// Instruction reads memory.
    pub mem_read: bool,
    /// Instruction writes memory.
    pub mem_write: bool,
    /// Redirect target for a taken branch.
    pub target: u32,
}

/// Entry in the MEM/WB latch (Memory to Writeback).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct MemWb {
    /// Instruction leaving memory.
    pub inst: Instruction,
    /// Program counter of the instruction.
    pub pc: u32,
    /// ALU result.
    pub val_e: u32,
    /// Loaded value.
    pub val_m: u32,
    /// Destination written from the ALU result.
    pub dst_e: Option<RegId>,
    /// Destination written from the loaded value.
    pub dst_m: Option<RegId>,
}

/// Entry in the post-WB latch: the instruction committed this cycle.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct WbLatch {
    /// Committed instruction.
    pub inst: Instruction,
    /// Program counter of the instruction.
    pub pc: u32,
    /// Committed ALU result.
    pub val_e: u32,
    /// Committed loaded value.
    pub val_m: u32,
    /// Register written from `val_e`.
    pub dst_e: Option<RegId>,
    /// Register written from `val_m`.
    pub dst_m: Option<RegId>,
}

/// One entry per stage boundary.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Latches {
    /// Fetch to Decode.
    pub if_id: IfId,
    /// Decode to Execute.
    pub id_ex: IdEx,
    /// Execute to Memory.
    pub ex_mem: ExMem,
    /// Memory to Writeback.
    pub mem_wb: MemWb,
    /// After Writeback.
    pub wb: WbLatch,
}

impl Latches {
    /// Initial state: every latch empty, fetch primed so that its first
    /// sequential step lands on `entry`.
    pub fn reset(entry: u32) -> Self {
        Self {
            if_id: IfId {
                inst: Instruction::NOP,
                pc: entry.wrapping_sub(INSTRUCTION_SIZE),
                npc: entry,
            },
            ..Self::default()
        }
    }
}
