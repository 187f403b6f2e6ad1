use crate::constants::NUM_REGISTERS;

///# Holds all the registers and the sound and delay timers
#[derive(Clone, Copy, Default)]
pub struct Registers {
    register: [u8; NUM_REGISTERS],
    vindex: u16,
    /// 0 by default, unless its set to a number then it will just start
    /// decrementing by one 60 times per second
    delay_timer: u8,
    /// Also 0, and decremented at 60hz when set like the delay timer. Except
    /// the sound timer causes a beep while its not zero. So: quiet when 0,
    /// beeping when not 0
    sound_timer: u8,
}

impl Registers {
    pub fn set_index_register(&mut self, value: u16) {
        self.vindex = value;
    }
    pub fn get_index_register(&self) -> u16 {
        self.vindex
    }
    pub fn set_sound_timer(&mut self, value: u8) {
        self.sound_timer = value;
    }
    pub fn get_sound_timer(&self) -> u8 {
        self.sound_timer
    }
    pub fn set_delay_timer(&mut self, value: u8) {
        self.delay_timer = value;
    }
    pub fn get_delay_timer(&self) -> u8 {
        self.delay_timer
    }

    /// One 60hz tick, both timers count down to zero and stay there
    pub fn tick_timers(&mut self) {
        self.delay_timer = self.delay_timer.saturating_sub(1);
        self.sound_timer = self.sound_timer.saturating_sub(1);
    }

    /// The register index always comes out of a 4 bit instruction field, so
    /// it is masked rather than range checked
    pub fn get_register(&self, register: u8) -> u8 {
        self.register[(register & 0xf) as usize]
    }
    pub fn set_register(&mut self, register: u8, value: u8) {
        self.register[(register & 0xf) as usize] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timers_count_down_and_stop_at_zero() {
        let mut registers = Registers::default();
        registers.set_delay_timer(100);
        registers.set_sound_timer(30);
        for _ in 0..60 {
            registers.tick_timers();
        }
        assert_eq!(registers.get_delay_timer(), 40);
        assert_eq!(registers.get_sound_timer(), 0);
    }
}
