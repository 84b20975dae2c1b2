//! Writeback (WB) Stage.
//!
//! Commits the loaded value and the ALU result to the register file. A
//! committed `syscall` first makes memory coherent by flushing the cache,
//! reports the statistics gathered so far, then runs the system-call handler.

use crate::common::SimError;
use crate::core::Cpu;
use crate::core::pipeline::latches::{MemWb, WbLatch};
use crate::isa::opcodes as op;
use crate::sim::syscall::SyscallOutcome;

/// Executes the writeback stage.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
/// * `mem_wb` - The MEM/WB entry at the start of this cycle
///
/// # Errors
///
/// Returns an error if the cache flush faults or the system call fails.
pub fn wb_stage(cpu: &mut Cpu, mem_wb: &MemWb) -> Result<WbLatch, SimError> {
    if mem_wb.inst.is_nop() {
        return Ok(WbLatch::default());
    }

    if let Some(dst) = mem_wb.dst_m {
        cpu.regs.write(dst, mem_wb.val_m);
    }
    if let Some(dst) = mem_wb.dst_e {
        cpu.regs.write(dst, mem_wb.val_e);
    }
    cpu.stats.instructions_committed += 1;

    if mem_wb.inst.opcode() == op::SYSCALL {
        system_call(cpu, mem_wb)?;
    }

    Ok(WbLatch {
        inst: mem_wb.inst,
        pc: mem_wb.pc,
        val_e: mem_wb.val_e,
        val_m: mem_wb.val_m,
        dst_e: mem_wb.dst_e,
        dst_m: mem_wb.dst_m,
    })
}

fn system_call(cpu: &mut Cpu, mem_wb: &MemWb) -> Result<(), SimError> {
    cpu.stats.syscalls += 1;

    if let Some(cache) = &mut cpu.cache {
        cache.flush(cpu.mem.as_mut())?;
        let s = cache.stats();
        tracing::info!(
            clock = cpu.stats.clock,
            accesses = s.accesses,
            hits = s.hits,
            misses = s.misses,
            replacements = s.replacements,
            writebacks = s.writebacks,
            "cache flushed at syscall"
        );
    } else {
        tracing::info!(clock = cpu.stats.clock, "syscall");
    }

    let outcome = cpu
        .syscalls
        .handle(mem_wb.inst, mem_wb.pc, &mut cpu.regs, cpu.mem.as_mut())?;
    if let SyscallOutcome::Exit(code) = outcome {
        tracing::info!(code, "program exited");
        cpu.exit_code = Some(code);
    }
    Ok(())
}
