// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Lesewerk — Text File Viewer with OCR
//
// Entry point. Initialises logging, backend services, app state, and launches
// the Dioxus UI.

mod pages;
mod services;
mod state;

use dioxus::prelude::*;

use pages::viewer::Viewer;
use services::viewer_services::ViewerServices;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Lesewerk starting");

    dioxus::launch(app);
}

/// Root component.
fn app() -> Element {
    let svc = use_hook(|| {
        let svc = ViewerServices::init();
        tracing::info!(ocr = svc.ocr_ready(), "backend services initialised");
        svc
    });

    use_context_provider(|| svc.clone());
    use_context_provider(|| Signal::new(state::ViewerState::new(svc.new_session())));

    rsx! {
        Viewer {}
    }
}
