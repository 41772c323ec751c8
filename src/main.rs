use std::rc::Rc;

use clap::Parser;
use glam::Vec3;
use log::{debug, info};

use scene_walker::cli::Cli;
use scene_walker::scenes::create_studio_scene;
use scene_walker::{
    Button, Camera, FirstPersonControls, GazeProbe, InputEvent, InputSource, NavSettings,
    ScriptedInput,
};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let settings = match &cli.settings {
        Some(path) => NavSettings::load(path)?,
        None => NavSettings::default(),
    };

    run_walkthrough(&cli, settings);
    Ok(())
}

/// Scripted walkthrough of the studio scene: drop in, drag the view level
/// and toward the north wall, then hold W and walk until the gaze probe
/// picks up the tagged props.
fn run_walkthrough(cli: &Cli, settings: NavSettings) {
    let scene = Rc::new(create_studio_scene());

    let mut camera = Camera::new(Vec3::new(1.0, 6.0, 1.0));
    camera.look_at(Vec3::ZERO);

    let mut controls = FirstPersonControls::new(settings);
    controls.enable(&camera);
    controls.set_collider(Some(scene.clone()));

    let mut input = ScriptedInput::new();
    input.push(InputEvent::PointerDown { x: 400.0, y: 300.0 });
    input.push(InputEvent::PointerMove { x: 498.0, y: 170.0 });
    input.push(InputEvent::PointerUp);
    input.push(InputEvent::KeyDown(Button::KeyW));

    let gaze = GazeProbe::default();
    let mut prompt: Option<&str> = None;

    for frame in 0..cli.frames {
        while let Some(event) = input.poll() {
            controls.handle_event(event, &mut camera);
        }
        controls.update(cli.dt, &mut camera);

        let next_prompt = gaze
            .probe(camera.position, camera.forward(), &scene)
            .first()
            .and_then(|hit| match hit.name {
                name if name.contains("prateleira_cima") => Some("Press F to hear my music"),
                name if name.contains("MIXER_e_vinil") => Some("Press F to hear my sets"),
                _ => None,
            });
        if next_prompt != prompt {
            match next_prompt {
                Some(text) => info!("frame {frame}: {text}"),
                None => info!("frame {frame}: prompt cleared"),
            }
            prompt = next_prompt;
        }

        debug!(
            "frame {frame}: position ({:.3}, {:.3}, {:.3}) yaw {:.3} pitch {:.3}",
            camera.position.x, camera.position.y, camera.position.z, camera.yaw, camera.pitch
        );
    }

    input.push(InputEvent::KeyUp(Button::KeyW));
    while let Some(event) = input.poll() {
        controls.handle_event(event, &mut camera);
    }
    controls.disable();

    info!(
        "walkthrough finished at ({:.3}, {:.3}, {:.3})",
        camera.position.x, camera.position.y, camera.position.z
    );
}
