use stardrift::{Choreography, MemoryStage, ScrollMetrics, ScrollSession, VisibilityEvent};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let ch = Choreography::default();

    let mut stage = MemoryStage::new();
    stage.insert("#main-title");
    stage.insert(".page-section");
    stage.insert_with_attr(".page-section", "data-delay", "250");
    stage.insert(".astronaut");

    let mut session = ScrollSession::new(ch, stage)?;
    session.start(ScrollMetrics::new(0.0, 2000.0, 800.0))?;

    // Sections drift into view one clock tick apart.
    let targets: Vec<_> = session.observed_targets().to_vec();
    for (i, target) in targets.iter().enumerate() {
        session.advance_clock(i as u64 * 100);
        session.handle_visibility(VisibilityEvent {
            element: target.element,
            visible_ratio: 0.5,
        });
    }
    session.advance_clock(10_000);

    let stats = session.stats();
    println!(
        "{} reveals scheduled, {} classes applied",
        stats.reveals_scheduled, stats.classes_applied
    );
    for target in &targets {
        println!(
            "element {}: classes {:?}",
            target.element.0,
            session.stage().classes(target.element)
        );
    }

    Ok(())
}
