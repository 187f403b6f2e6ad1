///This holds all of the constants (written in capital letters in the code)
mod constants;
///Handles the fetch, decode, execute cycle
mod cpu;
///The fault and rom loading error types
mod error;
///Field views over a 16 bit instruction word
mod instruction;
///A data structure modeling ram
mod ram;
///The registers and timers for the chip8 cpu
mod registers;
///The stack that is used in the cpu
mod stack;

// Re-export everything a host loop needs to drive the machine
pub use constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH, MAX_ROM_SIZE, NUM_KEYS, ROM_START_ADDRESS};
pub use cpu::{Cpu, StepOutcome};
pub use error::{Fault, LoadError};
pub use instruction::Instruction;

/// One byte per pixel, row major. 0x00 is an off pixel, 0xff an on pixel,
/// so the buffer can be uploaded to a grayscale texture as-is.
pub type Framebuffer = [u8; DISPLAY_WIDTH as usize * DISPLAY_HEIGHT as usize];
