// SPDX-FileCopyrightText: 2026 Google LLC
//
// SPDX-License-Identifier: Apache-2.0
#![no_std]
#![cfg_attr(not(test), no_main)]

use core::fmt::Write;

use icebreaker_sys::accel::CustomInstructionMac;
use icebreaker_sys::config::ICEBREAKER;
use icebreaker_sys::console::Console;
use icebreaker_sys::counters::HartCounters;
use icebreaker_sys::memory::PhysicalMemory;
use icebreaker_sys::menu::Diagnostics;
use icebreaker_sys::uart::log::LOGGER;
use icebreaker_sys::uart::Uart;
use log::{debug, LevelFilter};

#[cfg(not(test))]
use riscv_rt::entry;

#[cfg_attr(not(test), entry)]
fn main() -> ! {
    // Initialize peripherals.
    let uart = unsafe { Uart::new(ICEBREAKER.uart_data) };

    unsafe {
        LOGGER.set_uart(uart.clone());
        LOGGER.display_source.set(LevelFilter::Warn);
        log::set_logger_racy(&LOGGER).ok();
        log::set_max_level_racy(ICEBREAKER.log_level);
    }

    debug!(
        "diagnostics console, {} KiB SPRAM",
        ICEBREAKER.mem_total / 1024
    );

    // The memory test and dump ranges never overlap the firmware's own RAM,
    // see `memory.x`.
    let memory = unsafe { PhysicalMemory::new() };

    Diagnostics::new(
        Console::new(uart),
        HartCounters,
        memory,
        CustomInstructionMac,
        ICEBREAKER,
    )
    .run()
}

#[panic_handler]
fn panic_handler(info: &core::panic::PanicInfo) -> ! {
    let mut uart = unsafe { Uart::new(ICEBREAKER.uart_data) };
    writeln!(uart, "Panicked! {info}").ok();
    loop {
        continue;
    }
}
