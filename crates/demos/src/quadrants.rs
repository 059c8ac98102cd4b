//! The quadrant demo scene: a 2x2 colored grid of nested containers,
//! overlaid with a centered translucent square. Renders one frame
//! against the recording surface and dumps the resulting draw list.

use anyhow::Result;
use clap::Parser;
use tracing::info;
use trellis::{
    Align, Color, Container, Fill, LayoutBox, Overlay, RenderContext, Root, Widget,
    surface::test::TestSurface,
};

#[derive(Parser)]
#[command(about = "Render the quadrant demo scene and dump its draw list")]
struct Cli {
    /// Canvas width in pixels.
    #[arg(long, default_value_t = 640)]
    width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = 480)]
    height: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let cli = Cli::parse();

    // Two rows of two equally weighted fills each, stacked in a column.
    let top = Container::row()
        .flex(Fill::new(Color::RED), 1.0)
        .flex(Fill::new(Color::YELLOW), 1.0);
    let bottom = Container::row()
        .flex(Fill::new(Color::GREEN), 1.0)
        .flex(Fill::new(Color::BLUE), 1.0);
    let grid = Container::column().flex(top, 1.0).flex(bottom, 1.0);

    // The translucent square paints over the grid because it is the
    // later overlay child.
    let square = Align::center(Fill::rigid(Color::WHITE.with_alpha(0.75), 64.0, 64.0));
    let overlay = Overlay::new().child(grid).child(square);

    let mut root = Root::new(overlay);
    let ctx = RenderContext::root(cli.width, cli.height);
    let mut surface = TestSurface::new();
    let used = root.render(&ctx, &mut surface, &LayoutBox::default())?;

    info!(used.w, used.h, "rendered one frame");
    for op in surface.ops() {
        info!(?op, "draw");
    }
    Ok(())
}
