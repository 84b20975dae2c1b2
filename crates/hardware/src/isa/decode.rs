//! PISA Opcode Decode Table.
//!
//! This module maps a primary opcode to its operand descriptor: which
//! instruction fields name the input and output registers, and which flag
//! bits (immediate, displacement, load, store, control) apply. It provides:
//! 1. **Flags:** `InstFlags`, the PISA instruction-class bit set.
//! 2. **Operand Slots:** `Operand`, resolved against an instruction into a `RegId`.
//! 3. **Table Contract:** the `DecodeTable` trait consumed by the decode stage.
//! 4. **Built-in Table:** `PisaDecodeTable`, covering the modelled integer subset.

use std::ops::BitOr;

use crate::common::RegId;
use crate::isa::instruction::Instruction;
use crate::isa::opcodes as op;

/// PISA instruction-class flag bits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct InstFlags(u32);

impl InstFlags {
    /// No flags.
    pub const NONE: Self = Self(0);
    /// Integer computation.
    pub const ICOMP: Self = Self(0x0000_0001);
    /// Control transfer.
    pub const CTRL: Self = Self(0x0000_0004);
    /// Unconditional control transfer.
    pub const UNCOND: Self = Self(0x0000_0008);
    /// Conditional control transfer.
    pub const COND: Self = Self(0x0000_0010);
    /// Memory access.
    pub const MEM: Self = Self(0x0000_0020);
    /// Memory load.
    pub const LOAD: Self = Self(0x0000_0040);
    /// Memory store.
    pub const STORE: Self = Self(0x0000_0080);
    /// Displaced (base + offset) addressing.
    pub const DISP: Self = Self(0x0000_0100);
    /// Trapping instruction.
    pub const TRAP: Self = Self(0x0000_0800);
    /// Long-latency operation.
    pub const LONGLAT: Self = Self(0x0000_1000);
    /// Direct jump or branch.
    pub const DIRJMP: Self = Self(0x0000_2000);
    /// Operand B is the sign-extended immediate.
    pub const IMM: Self = Self(0x0002_0000);

    /// Returns `true` if every bit of `other` is set in `self`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns the raw bit pattern.
    pub const fn bits(self) -> u32 {
        self.0
    }
}

impl BitOr for InstFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// An operand slot: which instruction field (or fixed register) it names.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
    /// The `rs` field.
    Rs,
    /// The `rt` field.
    Rt,
    /// The `rd` field.
    Rd,
    /// The `HI` accumulator.
    Hi,
    /// The `LO` accumulator.
    Lo,
}

impl Operand {
    /// Resolves the slot against a concrete instruction.
    pub const fn resolve(self, inst: Instruction) -> RegId {
        match self {
            Self::Rs => inst.rs(),
            Self::Rt => inst.rt(),
            Self::Rd => inst.rd(),
            Self::Hi => RegId::HI,
            Self::Lo => RegId::LO,
        }
    }
}

/// Operand and flag descriptor for one opcode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OpInfo {
    /// Assembler mnemonic.
    pub name: &'static str,
    /// Instruction-class flags.
    pub flags: InstFlags,
    /// First input slot.
    pub in1: Option<Operand>,
    /// Second input slot (the base register for displaced addressing).
    pub in2: Option<Operand>,
    /// Third input slot.
    pub in3: Option<Operand>,
    /// First output slot.
    pub out1: Option<Operand>,
    /// Second output slot.
    pub out2: Option<Operand>,
}

/// Register operands of one instruction after resolving its slots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Operands {
    /// First input register.
    pub in1: Option<RegId>,
    /// Second input register.
    pub in2: Option<RegId>,
    /// Third input register.
    pub in3: Option<RegId>,
    /// First output register.
    pub out1: Option<RegId>,
    /// Second output register.
    pub out2: Option<RegId>,
}

impl Operands {
    /// Iterates over the present input registers.
    pub fn inputs(&self) -> impl Iterator<Item = RegId> {
        [self.in1, self.in2, self.in3].into_iter().flatten()
    }
}

impl OpInfo {
    /// Resolves every operand slot against `inst`.
    pub fn resolve(&self, inst: Instruction) -> Operands {
        let r = |slot: Option<Operand>| slot.map(|s| s.resolve(inst));
        Operands {
            in1: r(self.in1),
            in2: r(self.in2),
            in3: r(self.in3),
            out1: r(self.out1),
            out2: r(self.out2),
        }
    }
}

/// Opcode-to-descriptor mapping consumed by the decode stage.
///
/// Returning `None` marks the opcode as unrecognised; the pipeline then
/// carries it as an operand-less no-op rather than raising an error.
pub trait DecodeTable {
    /// Looks up the descriptor for `opcode`.
    fn lookup(&self, opcode: u8) -> Option<OpInfo>;
}

/// Built-in decode table for the PISA integer subset.
#[derive(Clone, Copy, Debug, Default)]
pub struct PisaDecodeTable;

impl DecodeTable for PisaDecodeTable {
    fn lookup(&self, opcode: u8) -> Option<OpInfo> {
        lookup(opcode)
    }
}

/// Descriptor for a three-register integer operation: `rd <- rs op rt`.
const fn rrr(name: &'static str) -> OpInfo {
    OpInfo {
        name,
        flags: InstFlags::ICOMP,
        in1: Some(Operand::Rs),
        in2: Some(Operand::Rt),
        in3: None,
        out1: Some(Operand::Rd),
        out2: None,
    }
}

/// Descriptor for a register-immediate integer operation: `rt <- rs op imm`.
const fn rri(name: &'static str) -> OpInfo {
    OpInfo {
        name,
        flags: InstFlags(InstFlags::ICOMP.0 | InstFlags::IMM.0),
        in1: Some(Operand::Rs),
        in2: None,
        in3: None,
        out1: Some(Operand::Rt),
        out2: None,
    }
}

/// Descriptor for a conditional branch comparing `rs` with `rt`.
const fn branch(name: &'static str) -> OpInfo {
    OpInfo {
        name,
        flags: InstFlags(InstFlags::CTRL.0 | InstFlags::COND.0 | InstFlags::DIRJMP.0),
        in1: Some(Operand::Rs),
        in2: Some(Operand::Rt),
        in3: None,
        out1: None,
        out2: None,
    }
}

/// Descriptor for a move from an accumulator into `rd`.
const fn move_from(name: &'static str, acc: Operand) -> OpInfo {
    OpInfo {
        name,
        flags: InstFlags::ICOMP,
        in1: Some(acc),
        in2: None,
        in3: None,
        out1: Some(Operand::Rd),
        out2: None,
    }
}

const EMPTY: OpInfo = OpInfo {
    name: "",
    flags: InstFlags::NONE,
    in1: None,
    in2: None,
    in3: None,
    out1: None,
    out2: None,
};

/// Returns the descriptor for `opcode`, or `None` if it is not modelled.
pub const fn lookup(opcode: u8) -> Option<OpInfo> {
    let info = match opcode {
        op::NOP => OpInfo { name: "nop", ..EMPTY },
        op::JUMP => OpInfo {
            name: "j",
            flags: InstFlags(InstFlags::CTRL.0 | InstFlags::UNCOND.0 | InstFlags::DIRJMP.0),
            ..EMPTY
        },
        op::BEQ => branch("beq"),
        op::BNE => branch("bne"),
        op::LW => OpInfo {
            name: "lw",
            flags: InstFlags(InstFlags::MEM.0 | InstFlags::LOAD.0 | InstFlags::DISP.0),
            in2: Some(Operand::Rs),
            out1: Some(Operand::Rt),
            ..EMPTY
        },
        op::SW => OpInfo {
            name: "sw",
            flags: InstFlags(InstFlags::MEM.0 | InstFlags::STORE.0 | InstFlags::DISP.0),
            in1: Some(Operand::Rt),
            in2: Some(Operand::Rs),
            ..EMPTY
        },
        op::ADD => rrr("add"),
        op::ADDI => rri("addi"),
        op::ADDU => rrr("addu"),
        op::ADDIU => rri("addiu"),
        op::SUB => rrr("sub"),
        op::SUBU => rrr("subu"),
        op::MULTU => OpInfo {
            name: "multu",
            flags: InstFlags(InstFlags::ICOMP.0 | InstFlags::LONGLAT.0),
            in1: Some(Operand::Rs),
            in2: Some(Operand::Rt),
            out1: Some(Operand::Hi),
            out2: Some(Operand::Lo),
            ..EMPTY
        },
        op::MFHI => move_from("mfhi", Operand::Hi),
        op::MFLO => move_from("mflo", Operand::Lo),
        op::AND => rrr("and"),
        op::ANDI => rri("andi"),
        op::OR => rrr("or"),
        op::ORI => rri("ori"),
        op::SLL => OpInfo {
            name: "sll",
            flags: InstFlags::ICOMP,
            in1: Some(Operand::Rt),
            out1: Some(Operand::Rd),
            ..EMPTY
        },
        op::SLT => rrr("slt"),
        op::SLTI => rri("slti"),
        op::SYSCALL => OpInfo {
            name: "syscall",
            flags: InstFlags::TRAP,
            ..EMPTY
        },
        op::LUI => OpInfo {
            name: "lui",
            flags: InstFlags::ICOMP,
            out1: Some(Operand::Rt),
            ..EMPTY
        },
        _ => return None,
    };
    Some(info)
}
