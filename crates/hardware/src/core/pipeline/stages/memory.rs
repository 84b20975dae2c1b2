//! Memory Access (MEM) Stage.
//!
//! Performs the load or store of the instruction leaving execute. A load's
//! value becomes forwardable as soon as this stage produces it, so its
//! destination is released from the in-flight set here rather than at
//! writeback.

use crate::common::SimError;
use crate::core::Cpu;
use crate::core::pipeline::latches::{ExMem, MemWb};

/// Executes the memory access stage.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
/// * `ex_mem` - The EX/MEM entry at the start of this cycle
///
/// # Errors
///
/// Any fault on the load or store path is fatal and returned as
/// [`SimError::MemoryFault`].
pub fn mem_stage(cpu: &mut Cpu, ex_mem: &ExMem) -> Result<MemWb, SimError> {
    if ex_mem.inst.is_nop() {
        return Ok(MemWb::default());
    }

    let mut mw = MemWb {
        inst: ex_mem.inst,
        pc: ex_mem.pc,
        val_e: ex_mem.val_e,
        val_m: 0,
        dst_e: ex_mem.dst_e,
        dst_m: ex_mem.dst_m,
    };

    if ex_mem.mem_read {
        let (value, latency) = cpu.load_word(ex_mem.val_e)?;
        mw.val_m = value;
        cpu.stats.clock += latency;
        if let Some(dst) = ex_mem.dst_m {
            cpu.control.regs.remove(dst);
        }
    } else if ex_mem.mem_write {
        let latency = cpu.store_word(ex_mem.val_e, ex_mem.val_a)?;
        cpu.stats.clock += latency;
    }

    Ok(mw)
}
