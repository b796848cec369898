use std::path::PathBuf;
use std::time::{Duration, Instant};

use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use chip8vm::constants::FRAME_NANOS;
use chip8vm::{Chip8, Cycle, Quirks};
use display::Display;

use crate::keymap::keymap;

pub struct Config {
    pub rom: PathBuf,
    pub quirks: Quirks,
    pub cycles_per_frame: u32,
    pub scale: u32,
}

pub fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut chip8 = Chip8::with_quirks(config.quirks);

    // Load ROM before touching SDL; nothing runs if it's missing
    chip8.load_rom_file(&config.rom)?;

    // Get SDL2 context
    let sdl: sdl2::Sdl = sdl2::init()?;
    let mut display = Display::new(&sdl, config.scale)?;
    let mut events = sdl.event_pump()?;
    display.render(chip8.frame())?;

    // One frame per timer tick
    let frame_time = Duration::from_nanos(FRAME_NANOS);
    let mut last_frame: Instant = Instant::now();

    // Whether or not the 60Hz frame rate should be respected
    let mut fast_forward: bool = false;
    // Whether the game's state should be cycled forwards or backwards
    let mut rewind: bool = false;
    let mut beeping: bool = false;

    'event: loop {
        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. } => break 'event,
                Event::KeyDown {
                    keycode: Some(key),
                    repeat: false,
                    ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => chip8.key_press(kc),
                    (Keycode::Space, _) => fast_forward = true,
                    (Keycode::Escape, _) => rewind = true,
                    _ => continue,
                },
                Event::KeyUp {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => chip8.key_release(kc),
                    (Keycode::Space, _) => fast_forward = false,
                    (Keycode::Escape, _) => rewind = false,
                    _ => continue,
                },
                _ => continue,
            };
        }

        // Update state
        if rewind {
            for _ in 0..config.cycles_per_frame {
                chip8.reverse_cycle();
            }
        } else {
            for _ in 0..config.cycles_per_frame {
                // Stop early rather than spin while Fx0A waits on input
                if chip8.cycle()? == Cycle::AwaitingKey {
                    break;
                }
            }
            chip8.tick_timers();
        }

        if chip8.sound_active() != beeping {
            beeping = chip8.sound_active();
            log::debug!("sound {}", if beeping { "on" } else { "off" });
        }

        // If the draw flag is set, unset it and render the current frame
        if let Some(frame) = chip8.take_frame() {
            display.render(&frame)?;
        }

        // Handle timing
        let elapsed = last_frame.elapsed();
        if !fast_forward && frame_time > elapsed {
            std::thread::sleep(frame_time - elapsed);
        }
        last_frame = Instant::now();
    }

    Ok(())
}
