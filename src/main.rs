//! tiltmap - Parameter registry with motion-sensor mapping

use std::sync::mpsc;
use std::sync::{Arc, RwLock};

use anyhow::{anyhow, Result};
use clap::Parser;
use log::info;
use tiltmap::config;
use tiltmap::surface::{MidiListener, MidiRouter};
use tiltmap::ParameterRegistry;

mod cli;
mod demo;

use cli::{Cli, Commands};
use demo::DemoPatch;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Params => {
            let patch = DemoPatch::new();
            let mut registry = ParameterRegistry::new();
            patch.build(&mut registry)?;

            println!("{} parameters:\n", registry.count());
            for (index, param) in registry.parameters().iter().enumerate() {
                println!(
                    "  #{:<2} {:<26} {:>9.3} [{} .. {}] step {} {} ({})",
                    index,
                    param.name(),
                    param.value(),
                    param.min(),
                    param.max(),
                    param.step(),
                    param.unit(),
                    param.scale().as_str()
                );
            }

            println!("\nSensor mappings:");
            for index in 0..registry.count() {
                if let Some(line) = describe_mapping(&registry, index) {
                    println!("  {}", line);
                }
            }
        }

        Commands::Check { config: config_path } => {
            println!("Checking configuration at {:?}...", config_path);

            match config::load_config(&config_path) {
                Ok(cfg) => {
                    println!("Configuration is valid!");
                    println!("  Sensor mappings: {}", cfg.sensors.len());
                    for mapping in &cfg.sensors {
                        match mapping.axis {
                            Some(axis) => println!(
                                "    - {} <- {} ({}) [{} / {} / {}]",
                                mapping.param, axis, mapping.curve, mapping.amin, mapping.amid, mapping.amax
                            ),
                            None => println!("    - {} [unmapped]", mapping.param),
                        }
                    }
                    println!("  MIDI port: {}", cfg.midi.port.as_deref().unwrap_or("(first available)"));
                    println!("  MIDI bindings: {}", cfg.midi.bindings.len());
                    for binding in &cfg.midi.bindings {
                        println!("    - CC {} -> {}", binding.cc, binding.param);
                    }
                }
                Err(e) => {
                    println!("Configuration is invalid: {:#}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Simulate {
            config: config_path,
            axis,
            from,
            to,
            steps,
        } => {
            let patch = DemoPatch::new();
            let mut registry = ParameterRegistry::new();
            patch.build(&mut registry)?;

            if let Some(path) = config_path {
                let cfg = config::load_config(&path)?;
                let applied = config::apply_sensor_mappings(&cfg, &mut registry);
                info!("applied {} of {} sensor mappings", applied, cfg.sensors.len());
            }

            let driven: Vec<usize> = (0..registry.count())
                .filter(|&i| matches!(registry.active_mapping(i), Some((a, _)) if a == axis))
                .collect();

            if driven.is_empty() {
                println!("No parameters follow axis {}.", axis);
                return Ok(());
            }

            print!("{:>9}", axis);
            for &index in &driven {
                print!("  {:>24}", registry.name(index));
            }
            println!();

            for reading in sweep(from, to, steps) {
                registry.propagate(axis, reading);
                print!("{:>9.3}", reading);
                for &index in &driven {
                    print!("  {:>24.3}", registry.value(index));
                }
                println!();
            }
        }

        Commands::Listen { config: config_path } => {
            println!("Loading configuration from {:?}...", config_path);
            let cfg = config::load_config(&config_path)?;

            let patch = DemoPatch::new();
            let mut registry = ParameterRegistry::new();
            patch.build(&mut registry)?;
            config::apply_sensor_mappings(&cfg, &mut registry);

            let router = MidiRouter::new(&cfg.midi, &registry);
            println!("{} MIDI controllers bound.", router.bound_count());

            let shared = Arc::new(RwLock::new(registry));
            let listener = MidiListener::connect(cfg.midi.port.as_deref(), router, Arc::clone(&shared))?;
            println!("Listening on {} (Ctrl-C to stop)...", listener.port_name());

            let (tx, rx) = mpsc::channel();
            ctrlc::set_handler(move || {
                let _ = tx.send(());
            })?;
            rx.recv()?;
            drop(listener);

            let registry = shared.read().map_err(|_| anyhow!("registry lock poisoned"))?;
            println!("\nFinal values:");
            for param in registry.parameters() {
                println!("  {:<26} {:>9.3} {}", param.name(), param.value(), param.unit());
            }
        }

        Commands::Init => {
            let example_config = include_str!("../tiltmap.example.yaml");

            let path = "tiltmap.yaml";
            if std::path::Path::new(path).exists() {
                println!("tiltmap.yaml already exists. Not overwriting.");
            } else {
                std::fs::write(path, example_config)?;
                println!("Created tiltmap.yaml with example configuration.");
            }
        }
    }

    Ok(())
}

/// One-line summary of the control driving parameter `index`
fn describe_mapping(registry: &ParameterRegistry, index: usize) -> Option<String> {
    let (axis, curve) = registry.active_mapping(index)?;
    let slot = registry.parameter(index).slot();
    let control = registry
        .controls(axis)
        .iter()
        .find(|zc| zc.is_active() && zc.is_bound_to(slot))?;
    let anchors = control.anchors();
    Some(format!(
        "{} <- axis {} ({}) [{} / {} / {}]",
        registry.name(index),
        axis,
        curve,
        anchors.amin,
        anchors.amid,
        anchors.amax
    ))
}

/// Evenly spaced readings from `from` to `to` inclusive
fn sweep(from: f64, to: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![from],
        n => (0..n)
            .map(|i| from + (to - from) * i as f64 / (n - 1) as f64)
            .collect(),
    }
}
