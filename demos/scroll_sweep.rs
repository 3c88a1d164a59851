use stardrift::{Choreography, MemoryStage, ScrollMetrics, ScrollSession};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let s = include_str!("../tests/data/choreography.json");
    let ch: Choreography = serde_json::from_str(s)?;

    let mut stage = MemoryStage::new();
    stage.insert(ch.flight.craft_selector.clone());
    stage.insert(ch.flight.viewer_selector.clone());
    for prop in &ch.props {
        stage.insert(prop.selector.clone());
    }

    let page = 2000.0;
    let viewport = 800.0;
    let mut session = ScrollSession::new(ch, stage)?;
    session.start(ScrollMetrics::new(0.0, page, viewport))?;

    for step in 0..=10u32 {
        let offset = (page - viewport) * f64::from(step) / 10.0;
        session.handle_scroll(ScrollMetrics::new(offset, page, viewport));
        session.run_frame()?;
    }

    let stats = session.stats();
    println!(
        "{} frames run, {} scroll events ({} coalesced)",
        stats.frames_run, stats.scroll_events, stats.scroll_events_coalesced
    );
    for mutation in session.stage().mutations() {
        println!("{}", serde_json::to_string(mutation)?);
    }

    Ok(())
}
