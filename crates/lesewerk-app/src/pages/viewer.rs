// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Viewer page — open a text file or an image, then change font, size, and
// colours for the whole document.
//
// All state changes go through the session's document; this page only turns
// clicks and dialog results into those calls and paints the snapshot.

use std::path::PathBuf;

use dioxus::prelude::*;

use lesewerk_core::error::{LesewerkError, RecognitionStage};
use lesewerk_core::types::{ColorSetting, Rgb};
use lesewerk_document::source::{FileFilter, image_filters, text_filters};

use crate::services::viewer_services::ViewerServices;
use crate::state::{StatusMessage, ViewerState};

/// Families offered in the font picker. The configured startup family is
/// added if it is not one of these.
const FONT_FAMILIES: &[&str] = &["Sans Serif", "Serif", "Monospace", "Cursive", "Fantasy"];

const BUTTON_STYLE: &str = "padding: 8px 12px; border-radius: 8px; border: 1px solid #007aff; color: #007aff; background: white;";
const PRIMARY_BUTTON_STYLE: &str = "padding: 8px 12px; border-radius: 8px; border: none; background: #007aff; color: white;";
const SMALL_BUTTON_STYLE: &str = "padding: 4px 8px; border-radius: 6px; border: 1px solid #ccc; background: white; font-size: 12px;";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColorTarget {
    Text,
    Background,
}

#[component]
pub fn Viewer() -> Element {
    let mut state = use_context::<Signal<ViewerState>>();
    let svc = use_context::<ViewerServices>();

    let (title, content, formatting, origin, size_field, status, busy) = {
        let st = state.read();
        let view = st.session.document().current_state();
        (
            st.session.title(),
            view.content.to_owned(),
            view.formatting.clone(),
            st.session.origin().summary(),
            st.size_field(),
            st.status.clone(),
            st.busy,
        )
    };

    let css = formatting.to_css();
    let family = formatting.font_family.clone();
    let text_hex = formatting.text_color.rgb().unwrap_or(Rgb::BLACK).to_hex();
    let background_hex = formatting
        .background_color
        .rgb()
        .unwrap_or(Rgb::WHITE)
        .to_hex();

    let mut families: Vec<String> = FONT_FAMILIES.iter().map(|f| f.to_string()).collect();
    let startup_family = svc.config().startup_font_family.clone();
    for extra in [startup_family, family.clone()] {
        if !families.contains(&extra) {
            families.push(extra);
        }
    }

    let ocr_ready = svc.ocr_ready();

    rsx! {
        document::Title { "{title}" }

        div { style: "display: flex; flex-direction: column; height: 100vh; font-family: system-ui, -apple-system, sans-serif; padding: 12px; box-sizing: border-box;",

            // File
            div { style: "display: flex; gap: 8px; align-items: center; flex-wrap: wrap;",
                button {
                    style: PRIMARY_BUTTON_STYLE,
                    disabled: busy,
                    onclick: move |_| open_text(state),
                    "Open Text File"
                }
                button {
                    style: BUTTON_STYLE,
                    disabled: busy || !ocr_ready,
                    title: if ocr_ready { "Recognise text in an image" } else { "OCR models are not installed" },
                    onclick: {
                        let svc = svc.clone();
                        move |_| open_image(state, &svc)
                    },
                    "Open Image"
                }
            }

            // View
            div { style: "display: flex; gap: 12px; align-items: center; flex-wrap: wrap; margin-top: 12px; padding-bottom: 12px; border-bottom: 1px solid #e0e0e0;",
                label { style: "display: flex; gap: 4px; align-items: center;",
                    "Font"
                    select {
                        style: "padding: 4px 8px; border: 1px solid #ccc; border-radius: 4px;",
                        value: "{family}",
                        onchange: move |evt| {
                            let requested = evt.value();
                            let mut st = state.write();
                            let size = i64::from(st.session.document().formatting().font_size.get());
                            let result = st
                                .session
                                .document_mut()
                                .set_font(&requested, size)
                                .map(|()| format!("Font changed to {requested}."));
                            st.report(result);
                        },
                        for name in families {
                            option { key: "{name}", value: "{name}", "{name}" }
                        }
                    }
                }

                label { style: "display: flex; gap: 4px; align-items: center;",
                    "Size"
                    input {
                        r#type: "number",
                        min: "1",
                        max: "100",
                        style: "width: 64px; padding: 4px 8px; border: 1px solid #ccc; border-radius: 4px; text-align: right;",
                        value: "{size_field}",
                        oninput: move |evt| state.write().edit_size(evt.value()),
                        onchange: move |evt| state.write().commit_size(&evt.value()),
                    }
                }

                ColorControl {
                    label: "Text colour",
                    value: text_hex,
                    on_pick: move |color| apply_color(state, ColorTarget::Text, color),
                }
                ColorControl {
                    label: "Background",
                    value: background_hex,
                    on_pick: move |color| apply_color(state, ColorTarget::Background, color),
                }
            }

            // Status
            if let Some(ref msg) = status {
                p { style: "margin: 8px 0 0; font-size: 14px; color: {msg.color()};",
                    "{msg.text}"
                }
            }

            // Document
            textarea {
                readonly: true,
                style: "flex: 1; margin-top: 12px; padding: 12px; border: 1px solid #ccc; border-radius: 8px; resize: none; {css}",
                placeholder: "Open a text file or an image to view it here.",
                value: "{content}",
            }

            if let Some(ref origin) = origin {
                p { style: "margin: 6px 0 0; font-size: 12px; color: #888;", "{origin}" }
            }
        }
    }
}

/// Colour input plus a button that reverts to the toolkit default.
#[component]
fn ColorControl(label: &'static str, value: String, on_pick: EventHandler<ColorSetting>) -> Element {
    let mut error = use_signal(|| Option::<String>::None);

    rsx! {
        label { style: "display: flex; gap: 4px; align-items: center;",
            "{label}"
            input {
                r#type: "color",
                value: "{value}",
                onchange: move |evt| match evt.value().parse::<Rgb>() {
                    Ok(rgb) => {
                        error.set(None);
                        on_pick.call(ColorSetting::Rgb(rgb));
                    }
                    Err(e) => error.set(Some(e.to_string())),
                },
            }
            button {
                style: SMALL_BUTTON_STYLE,
                onclick: move |_| {
                    error.set(None);
                    on_pick.call(ColorSetting::Unset);
                },
                "Default"
            }
            if let Some(msg) = error() {
                span { style: "color: #ff3b30; font-size: 12px;", "{msg}" }
            }
        }
    }
}

fn apply_color(mut state: Signal<ViewerState>, target: ColorTarget, color: ColorSetting) {
    let mut st = state.write();
    let doc = st.session.document_mut();
    match target {
        ColorTarget::Text => doc.set_text_color(color),
        ColorTarget::Background => doc.set_background_color(color),
    }
}

/// Native open dialog. An empty extension list means "any file".
fn pick_file(title: &str, filters: &[FileFilter]) -> Option<PathBuf> {
    let mut dialog = rfd::FileDialog::new().set_title(title);
    for filter in filters {
        let extensions: &[&str] = if filter.extensions.is_empty() {
            &["*"]
        } else {
            filter.extensions
        };
        dialog = dialog.add_filter(filter.name, extensions);
    }
    dialog.pick_file()
}

fn open_text(mut state: Signal<ViewerState>) {
    let Some(path) = pick_file("Open Text File", &text_filters()) else {
        return;
    };
    let mut st = state.write();
    let result = st
        .session
        .open_text(&path)
        .map(|()| format!("Opened {}.", path.display()));
    st.report(result);
}

/// Pick an image and run OCR on a blocking worker so the window keeps
/// painting. The document is only touched once recognition succeeds.
fn open_image(mut state: Signal<ViewerState>, svc: &ViewerServices) {
    let extractor = match svc.extractor() {
        Ok(extractor) => extractor,
        Err(e) => {
            state.write().report(Err(e));
            return;
        }
    };
    let Some(path) = pick_file("Open Image", &image_filters()) else {
        return;
    };

    {
        let mut st = state.write();
        st.busy = true;
        st.status = Some(StatusMessage::info(format!(
            "Recognising text in {}...",
            path.display()
        )));
    }

    spawn(async move {
        let worker_path = path.clone();
        let joined = tokio::task::spawn_blocking(move || {
            extractor
                .extract(&worker_path)
                .map(|text| (extractor.name(), text))
        })
        .await;

        let mut st = state.write();
        st.busy = false;
        let result = match joined {
            Ok(Ok((engine, text))) => {
                let lines = text.lines().count();
                st.session.apply_extracted(&path, engine, text);
                Ok(format!("Recognised {lines} line(s) from {}.", path.display()))
            }
            Ok(Err(e)) => Err(e),
            Err(join_err) => Err(LesewerkError::recognition(
                RecognitionStage::Engine,
                format!("OCR worker stopped: {join_err}"),
            )),
        };
        st.report(result);
    });
}
