use crate::{App, AppResult, VisitStep};

use clap::Subcommand;
use serde_json::{Value, json};
use site_core::Identity;
use site_router::Router;
use site_session::Storage;

#[derive(Subcommand)]
pub enum Commands {
    /// Start a session for an identity given as JSON (any shape)
    Login { identity: String },

    /// End the current session
    Logout,

    /// Show the restored session
    Whoami,

    /// List the navigation table
    Routes,

    /// Walk through the site and print each rendered page
    ///
    /// Steps are hrefs (`/gallery`, `/#About`), `back`, `forward`,
    /// or `scroll:<top>` / `scroll:<left>,<top>` to record the viewport
    /// offset on the current page.
    Visit {
        #[arg(required = true)]
        steps: Vec<String>,
    },
}

/// Runs one subcommand against a mounted app and returns its JSON output.
pub fn execute<S: Storage>(app: &mut App<S>, command: Commands) -> AppResult<Value> {
    match command {
        Commands::Login { identity } => {
            let identity: Identity = identity.parse()?;
            app.session().login(identity)?;
            Ok(session_status(app))
        }
        Commands::Logout => {
            app.session().logout()?;
            Ok(session_status(app))
        }
        Commands::Whoami => Ok(session_status(app)),
        Commands::Routes => Ok(serde_json::to_value(app.router().table().entries())?),
        Commands::Visit { steps } => visit(app, &steps),
    }
}

fn session_status<S: Storage>(app: &App<S>) -> Value {
    json!({
        "authenticated": app.session().is_authenticated(),
        "identity": app.session().identity(),
    })
}

/// All steps are parsed before any of them runs.
fn visit<S: Storage>(app: &mut App<S>, raw_steps: &[String]) -> AppResult<Value> {
    let steps = raw_steps
        .iter()
        .map(|raw| raw.parse::<VisitStep>())
        .collect::<AppResult<Vec<_>>>()?;

    let mut output = Vec::with_capacity(steps.len());

    for (raw, step) in raw_steps.iter().zip(steps) {
        let navigation = match step {
            VisitStep::Navigate(href) => Some(app.router_mut().navigate(&href)),
            VisitStep::Back => app.router_mut().back(),
            VisitStep::Forward => app.router_mut().forward(),
            VisitStep::Scroll(position) => {
                app.router_mut().record_scroll(position);
                output.push(json!({ "step": raw, "recorded": position }));
                continue;
            }
        };

        let entry = match navigation {
            Some(navigation) => json!({
                "step": raw,
                "page": app.render(&navigation),
                "navigation": navigation,
            }),
            None => json!({ "step": raw, "navigation": null }),
        };
        output.push(entry);
    }

    Ok(Value::Array(output))
}
