mod config;
mod sample;

use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use log::info;
use pagedom::{Event, Page};
use simplelog::{Config, LevelFilter, WriteLogger};
use unfurl::prelude::*;

use config::{DemoConfig, DemoError};

/// Tick the page clock on a real interval until every animation is done.
async fn animate(page: &mut Page, frame: Duration) -> usize {
    let mut interval = tokio::time::interval(frame);
    let mut frames = 0;
    while page.has_active_animations() {
        interval.tick().await;
        page.tick(frame);
        frames += 1;
    }
    frames
}

/// Dispatch an event, run the resulting animations and report.
async fn step(page: &mut Page, config: &DemoConfig, label: &str, event: Event) {
    let outcome = page.dispatch(event);
    let frames = animate(page, Duration::from_millis(config.frame_ms)).await;
    println!(
        "{label}: {} listener(s), default prevented: {}, {frames} frame(s)",
        outcome.delivered, outcome.default_prevented
    );
    if config.outlines {
        println!("{}", page.outline());
    }
}

fn resize(page: &mut Page, width: u16, menu: &MegaMenu) {
    page.set_viewport_width(width);
    println!("viewport {width}px: menu in {:?} mode", menu.mode());
}

async fn run(config: DemoConfig) -> Result<(), DemoError> {
    let log_file = File::create(&config.log_file)?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;
    info!("starting with {:?}", config);

    let mut page = sample::build(config.wide_width);
    page.set_reduced_motion(config.reduced_motion);

    let registry = mount_document(&mut page)?;
    let (menu, faq) = {
        let guard = registry.read().map_err(|_| DemoError::Registry)?;
        println!("mounted: {}", guard.ids().join(", "));
        (guard.mega_menu("main-menu")?.clone(), guard.accordion("faq")?.clone())
    };

    menu.subscribe(|_, event| info!("menu event: {:?}", event));
    if let Some(first) = faq.item(0) {
        first.on(Lifecycle::AfterOpen, |_, _| info!("first answer expanded"));
    }

    // Accordion
    step(&mut page, &config, "open faq 1", Event::click("faq-1-q")).await;
    step(&mut page, &config, "open faq 2", Event::click("faq-2-q")).await;
    println!("open faq items: {:?}", faq.open_items());

    if let Some(third) = faq.item(2) {
        let settle = third.open(&mut page, Some(Duration::from_millis(120)));
        animate(&mut page, Duration::from_millis(config.frame_ms)).await;
        println!("faq 3 open: {:?}", settle.await);
    }

    // Dropdown
    step(&mut page, &config, "open language", Event::click("language-trigger")).await;

    // Desktop menu
    println!("viewport {}px: menu in {:?} mode", config.wide_width, menu.mode());
    step(&mut page, &config, "hover shop", Event::mouse_enter("shop")).await;
    step(&mut page, &config, "leave shop", Event::mouse_leave("shop")).await;
    step(&mut page, &config, "click about", Event::click("about-label")).await;
    step(&mut page, &config, "click outside", Event::click("welcome")).await;

    // Mobile menu
    resize(&mut page, config.compact_width, &menu);
    step(&mut page, &config, "burger", Event::click("burger-label")).await;
    step(&mut page, &config, "open shop", Event::click("shop-label")).await;
    step(&mut page, &config, "open women", Event::click("shop-women-label")).await;
    step(&mut page, &config, "follow bags", Event::click("shop-women-bags-link")).await;
    println!("open menu items: {:?}", menu.open_items());
    step(&mut page, &config, "click outside", Event::click("welcome")).await;
    println!("mobile menu open: {}", menu.is_mobile_menu_open());
    resize(&mut page, config.wide_width, &menu);

    // Marquee
    step(&mut page, &config, "hover logos", Event::mouse_enter("logos")).await;
    println!(
        "logos: {:?}",
        page.get_property("logos", "--animation-play-state")
    );

    println!("{}", page.outline());

    registry
        .write()
        .map_err(|_| DemoError::Registry)?
        .unmount_all(&mut page);
    info!("{} listeners left after unmount", page.total_listeners());
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => match DemoConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => DemoConfig::default(),
    };

    if let Err(e) = run(config).await {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
