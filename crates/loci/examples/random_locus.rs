//! Print the envelope of a few random convex loci.
//!
//! Usage:
//!   cargo run -p loci --example random_locus -- [count]

use loci::envelope::{column_headers, extract_envelope, EnvelopeCfg, RangeTag};
use loci::geom2::rand::{draw_locus_radial, LocusBox, RadialCfg, ReplayToken, VertexCount};

fn main() {
    let count: u64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(3);
    let cfg = EnvelopeCfg::default();
    let rcfg = RadialCfg {
        vertex_count: VertexCount::Uniform { min: 5, max: 25 },
        ..RadialCfg::default()
    };
    for i in 0..count {
        let Some(locus) = draw_locus_radial(rcfg, LocusBox::default(), ReplayToken { seed: 2025, index: i })
        else {
            eprintln!("sample {i}: degenerate draw");
            continue;
        };
        let range = RangeTag::new(i as f64, (i + 1) as f64);
        let table = extract_envelope(&locus.verts, range, &cfg);
        println!(
            "sample {i}: V={}, area={:.4}, levels={} ({} base)",
            locus.len(),
            locus.area(),
            table.len(),
            table.base_levels
        );
        println!("  {}", column_headers(cfg.unit).join(" | "));
        for rec in table.rounded(cfg.decimals) {
            println!("  {:>10} | {:>10} | {:>10}", rec[0], rec[1], rec[2]);
        }
    }
}
