//! Navigation session simulation command
//!
//! Steps are applied in order to a single router, printing the view and
//! scroll target of every navigation.

use anyhow::{anyhow, Result};
use std::str::FromStr;
use tracing::{info, warn};
use waypoint_core::router::Navigation;
use waypoint_core::{Router, ScrollPosition};

/// One step of a simulated session
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Push(String),
    Replace(String),
    Named(String),
    Scroll(f64),
    Back,
    Forward,
    Go(isize),
}

impl FromStr for Step {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (verb, arg) = match s.split_once(':') {
            Some((verb, arg)) => (verb, Some(arg)),
            None => (s, None),
        };

        let step = match (verb, arg) {
            ("back", None) => Step::Back,
            ("forward", None) => Step::Forward,
            ("push", Some(path)) => Step::Push(path.to_string()),
            ("replace", Some(path)) => Step::Replace(path.to_string()),
            ("name", Some(name)) if !name.is_empty() => Step::Named(name.to_string()),
            ("scroll", Some(top)) => Step::Scroll(
                top.parse()
                    .map_err(|_| anyhow!("Invalid scroll offset in step '{}'", s))?,
            ),
            ("go", Some(delta)) => Step::Go(
                delta
                    .parse()
                    .map_err(|_| anyhow!("Invalid history delta in step '{}'", s))?,
            ),
            _ => return Err(anyhow!("Unknown step '{}'", s)),
        };
        Ok(step)
    }
}

/// Run a navigation session
pub fn walk_command(mut router: Router, steps: &[String]) -> Result<()> {
    let steps = steps
        .iter()
        .map(|raw| raw.parse::<Step>().map(|step| (raw.as_str(), step)))
        .collect::<Result<Vec<_>>>()?;
    info!(steps = steps.len(), "Starting navigation session");

    println!("start {}", router.current().path);
    for (label, step) in &steps {
        println!("{}", apply_step(&mut router, step, label));
    }

    Ok(())
}

/// Apply one step and describe the outcome
pub fn apply_step(router: &mut Router, step: &Step, label: &str) -> String {
    let outcome = match step {
        Step::Push(path) => Some(router.push(path)),
        Step::Replace(path) => Some(router.replace(path)),
        Step::Named(name) => match router.push_named(name) {
            Ok(navigation) => Some(navigation),
            Err(e) => {
                warn!(name = %name, "Named navigation failed");
                return format!("{label}: {e}");
            }
        },
        Step::Scroll(top) => {
            let position = ScrollPosition::vertical(*top);
            router.save_scroll(position);
            return format!("{label}: saved {} for {}", position, router.current().path);
        }
        Step::Back => router.back(),
        Step::Forward => router.forward(),
        Step::Go(delta) => router.go(*delta),
    };

    match outcome {
        Some(navigation) => describe_navigation(label, &navigation),
        None => format!("{label}: no entry, staying at {}", router.current().path),
    }
}

fn describe_navigation(label: &str, navigation: &Navigation) -> String {
    let mut line = format!(
        "{label} -> {} at {}, scroll {}",
        navigation.view, navigation.to.path, navigation.scroll
    );
    if let Some(from) = &navigation.redirected_from {
        line.push_str(&format!(" (redirected from {from})"));
    }
    line
}
