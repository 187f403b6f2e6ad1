use log::warn;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::Framebuffer;
use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH, FONT_GLYPH_SIZE, NUM_KEYS, ROM_START_ADDRESS};
use crate::error::{Fault, LoadError};
use crate::instruction::Instruction;
use crate::ram::Ram;
use crate::registers::Registers;
use crate::stack::Stack;

/// What a single fetch, decode, execute cycle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// A recognized instruction ran to completion
    Executed,
    /// Execution is suspended until the next key press arrives, nothing was
    /// fetched and the program counter did not move
    AwaitingKey,
    /// The fetched word is not a chip8 instruction. It is stepped over, the
    /// rest of the machine is untouched
    Unrecognized(u16),
}

/// The main cpu,
pub struct Cpu {
    /// One byte per pixel, 0x00 for off and 0xff for on, row major
    framebuffer: Framebuffer,
    ///Program counter, used to keep track of what to fetch, decode and execute from ram, initialized at 0x200
    program_counter: u16,
    /// A list of "buttons", for the keyboard. set to true when pressed, false otherwise
    keyboard: [bool; NUM_KEYS],
    /// The memory, stores the rom data when loaded
    memory: Ram,
    /// A random number generator. Seedable so that every random instruction can be tested with a fixed seed
    rng: ChaCha8Rng,
    /// Registers 0x0 through 0xF, the index register and both timers
    registers: Registers,
    stack: Stack,
    /// Set by FX0A. While this holds a target register the cpu stands still,
    /// only the timers keep running, until a key press lands in that register
    awaiting: Option<u8>,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    /// Creates a new cpu with the fontset in ram and an os seeded rng,
    /// waiting for a rom
    pub fn new() -> Self {
        Self::from_rng(ChaCha8Rng::from_os_rng())
    }

    /// Same cpu, but with a fixed rng seed so CXNN becomes reproducible
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    fn from_rng(rng: ChaCha8Rng) -> Self {
        Self {
            framebuffer: [0x00; DISPLAY_WIDTH * DISPLAY_HEIGHT],
            program_counter: ROM_START_ADDRESS,
            keyboard: [false; NUM_KEYS],
            memory: Ram::with_fonts(),
            rng,
            registers: Registers::default(),
            stack: Stack::default(),
            awaiting: None,
        }
    }

    /// Copies a rom into ram at 0x200. On error the machine is left
    /// un-started and another rom can be loaded
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<(), LoadError> {
        self.memory.load_rom(rom)
    }

    /// A single cpu cycle: fetch the word under the program counter, decode
    /// it and execute it. Does nothing while a FX0A key wait is pending, the
    /// host keeps calling [`Cpu::tick_timers`] on its own 60hz cadence either way
    pub fn step(&mut self) -> Result<StepOutcome, Fault> {
        if self.awaiting.is_some() {
            return Ok(StepOutcome::AwaitingKey);
        }
        let word = self.memory.get_word(self.program_counter)?;
        self.execute(Instruction::decode(word))
    }

    /// One 60hz timer tick, decoupled from how many [`Cpu::step`] calls
    /// happen in between
    pub fn tick_timers(&mut self) {
        self.registers.tick_timers();
    }

    /// The buzzer is on while the sound timer is nonzero
    pub fn sound_active(&self) -> bool {
        self.registers.get_sound_timer() > 0
    }

    /// Read-only view of the display for the host to blit
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// Feed a key press or release into the keypad. A press also resolves a
    /// pending FX0A wait by storing the key code in the waited-on register
    pub fn key_event(&mut self, key: u8, pressed: bool) {
        let key = key & 0xf;
        self.keyboard[key as usize] = pressed;
        if pressed {
            if let Some(target) = self.awaiting.take() {
                self.registers.set_register(target, key);
            }
        }
    }

    ///Execute one decoded instruction. The default epilogue moves the
    ///program counter one instruction forward, jumps and calls set it
    ///directly and skips move it two instructions forward
    fn execute(&mut self, instruction: Instruction) -> Result<StepOutcome, Fault> {
        let x = instruction.x();
        let y = instruction.y();
        let vx = self.registers.get_register(x);
        let vy = self.registers.get_register(y);

        let mut next = self.program_counter.wrapping_add(2);
        match instruction.kind() {
            0x0 => match instruction.word() {
                //00e0
                0x00e0 => {
                    self.framebuffer.fill(0x00);
                }
                //00ee, the stack holds the address of the call instruction,
                //so the default +2 resumes right after the call
                0x00ee => {
                    next = self.stack.pop()?.wrapping_add(2);
                }
                _ => return self.unrecognized(instruction),
            },
            //1nnn
            0x1 => {
                next = instruction.nnn();
            }
            //2nnn, pushes the address of the call itself, not of the
            //instruction after it
            0x2 => {
                self.stack.push(self.program_counter)?;
                next = instruction.nnn();
            }
            //3xnn
            0x3 => {
                if vx == instruction.nn() {
                    next += 2;
                }
            }
            //4xnn
            0x4 => {
                if vx != instruction.nn() {
                    next += 2;
                }
            }
            //5xy0
            0x5 => match instruction.n() {
                0x0 => {
                    if vx == vy {
                        next += 2;
                    }
                }
                _ => return self.unrecognized(instruction),
            },
            //6xnn
            0x6 => {
                self.registers.set_register(x, instruction.nn());
            }
            //7xnn, wraps mod 256 and leaves VF alone
            0x7 => {
                self.registers.set_register(x, vx.wrapping_add(instruction.nn()));
            }
            0x8 => match instruction.n() {
                //8xy0
                0x0 => {
                    self.registers.set_register(x, vy);
                }
                //8xy1, the bitwise ops reset VF, some roms depend on that
                0x1 => {
                    self.registers.set_register(x, vx | vy);
                    self.registers.set_register(0xf, 0);
                }
                //8xy2
                0x2 => {
                    self.registers.set_register(x, vx & vy);
                    self.registers.set_register(0xf, 0);
                }
                //8xy3
                0x3 => {
                    self.registers.set_register(x, vx ^ vy);
                    self.registers.set_register(0xf, 0);
                }
                //8xy4
                0x4 => {
                    let (res, carry) = vx.overflowing_add(vy);
                    self.registers.set_register(x, res);
                    self.registers.set_register(0xf, u8::from(carry));
                }
                //8xy5, VF is 1 when there was *no* borrow
                0x5 => {
                    let (res, borrow) = vx.overflowing_sub(vy);
                    self.registers.set_register(x, res);
                    self.registers.set_register(0xf, u8::from(!borrow));
                }
                //8xy6, reads the source from VY, the shifted out bit lands in VF
                0x6 => {
                    self.registers.set_register(x, vy >> 1);
                    self.registers.set_register(0xf, vy & 1);
                }
                //8xy7
                0x7 => {
                    let (res, borrow) = vy.overflowing_sub(vx);
                    self.registers.set_register(x, res);
                    self.registers.set_register(0xf, u8::from(!borrow));
                }
                //8xye
                0xe => {
                    self.registers.set_register(x, vy << 1);
                    self.registers.set_register(0xf, vy >> 7);
                }
                _ => return self.unrecognized(instruction),
            },
            //9xy0
            0x9 => match instruction.n() {
                0x0 => {
                    if vx != vy {
                        next += 2;
                    }
                }
                _ => return self.unrecognized(instruction),
            },
            //annn
            0xa => {
                self.registers.set_index_register(instruction.nnn());
            }
            //bnnn
            0xb => {
                next = instruction.nnn() + u16::from(self.registers.get_register(0));
            }
            //cxnn
            0xc => {
                let random_byte: u8 = self.rng.random();
                self.registers.set_register(x, random_byte & instruction.nn());
            }
            //dxyn
            0xd => {
                self.draw_sprite(vx, vy, instruction.n())?;
            }
            0xe => match instruction.nn() {
                //ex9e, reads the live keypad, a pending key wait is irrelevant here
                0x9e => {
                    if self.keyboard[(vx & 0xf) as usize] {
                        next += 2;
                    }
                }
                //exa1
                0xa1 => {
                    if !self.keyboard[(vx & 0xf) as usize] {
                        next += 2;
                    }
                }
                _ => return self.unrecognized(instruction),
            },
            0xf => match instruction.nn() {
                //fx07
                0x07 => {
                    self.registers.set_register(x, self.registers.get_delay_timer());
                }
                //fx0a, the wait is machine state, not a blocked thread. The
                //program counter already moved past the instruction, so the
                //key press resumes right after it
                0x0a => {
                    self.awaiting = Some(x);
                }
                //fx15
                0x15 => {
                    self.registers.set_delay_timer(vx);
                }
                //fx18
                0x18 => {
                    self.registers.set_sound_timer(vx);
                }
                //fx1e, plain 16 bit arithmetic, VF untouched
                0x1e => {
                    let vi = self.registers.get_index_register();
                    self.registers.set_index_register(vi.wrapping_add(u16::from(vx)));
                }
                //fx29, the font glyph for the low nibble of VX
                0x29 => {
                    self.registers.set_index_register(u16::from(vx & 0xf) * FONT_GLYPH_SIZE);
                }
                //fx33
                0x33 => {
                    let vi = self.registers.get_index_register();
                    self.memory.set_byte(vi, vx / 100)?;
                    self.memory.set_byte(vi + 1, vx / 10 % 10)?;
                    self.memory.set_byte(vi + 2, vx % 10)?;
                }
                //fx55, I itself is left unmodified by the bulk copy
                0x55 => {
                    let vi = self.registers.get_index_register();
                    for register in 0..=x {
                        let value = self.registers.get_register(register);
                        self.memory.set_byte(vi + u16::from(register), value)?;
                    }
                }
                //fx65
                0x65 => {
                    let vi = self.registers.get_index_register();
                    for register in 0..=x {
                        let value = self.memory.get_byte(vi + u16::from(register))?;
                        self.registers.set_register(register, value);
                    }
                }
                _ => return self.unrecognized(instruction),
            },
            _ => return self.unrecognized(instruction),
        }
        self.program_counter = next;
        Ok(StepOutcome::Executed)
    }

    /// XOR-draws an n row sprite read from ram at I, top left corner at
    /// (column, row). Coordinates wrap, sprites are never clipped. VF is set
    /// once for the whole sprite: 1 when any pixel flipped from on to off
    fn draw_sprite(&mut self, column: u8, row: u8, n: u8) -> Result<(), Fault> {
        let origin_x = column as usize % DISPLAY_WIDTH;
        let origin_y = row as usize % DISPLAY_HEIGHT;
        let base = self.registers.get_index_register();

        let mut erased = false;
        for sprite_row in 0..u16::from(n) {
            let bits = self.memory.get_byte(base.wrapping_add(sprite_row))?;
            for sprite_column in 0..8 {
                if bits >> (7 - sprite_column) & 1 == 0 {
                    continue;
                }
                let px = (origin_x + sprite_column) % DISPLAY_WIDTH;
                let py = (origin_y + sprite_row as usize) % DISPLAY_HEIGHT;
                let cell = py * DISPLAY_WIDTH + px;
                if self.framebuffer[cell] != 0 {
                    erased = true;
                }
                self.framebuffer[cell] ^= 0xff;
            }
        }
        self.registers.set_register(0xf, u8::from(erased));
        Ok(())
    }

    /// "not an opcode": report it and step over it, so that a stray data
    /// word cannot stall the engine in an infinite loop
    fn unrecognized(&mut self, instruction: Instruction) -> Result<StepOutcome, Fault> {
        warn!(
            "unrecognized opcode {:#06x} at {:#05x}",
            instruction.word(),
            self.program_counter
        );
        self.program_counter = self.program_counter.wrapping_add(2);
        Ok(StepOutcome::Unrecognized(instruction.word()))
    }
}
