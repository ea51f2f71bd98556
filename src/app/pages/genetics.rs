use crate::app::view::{Chart, ChartKind, NoticeLevel, RenderedPage};
use crate::app::view_model::{GeneticsControls, PageId};
use crate::core::genetics;
use rand::rngs::StdRng;
use rand::SeedableRng;

const MECHANISM: &str = "*Noccaea* tolerates toxic soil not by inventing new genes but by \
**duplicating** existing ones (Copy Number Variation). **HMA4** pumps Zinc from roots to shoots; \
high copy numbers lead to transcriptional overexpression and more protein pumps.";

const PATHWAY: &str = "\
### Evolutionary Pathway: From Mutation to Adaptation

1. **Duplication Event:** a DNA replication error creates a second copy of *HMA4*.
2. **Selection Pressure:** on toxic soil, plants with 2 copies pump metal faster and survive.
3. **Fixation:** over generations the CNV becomes fixed in the population.";

pub fn render(controls: &GeneticsControls) -> RenderedPage {
    let mut rng = StdRng::seed_from_u64(controls.seed);
    let population = genetics::generate_population(&mut rng, controls.population_size);
    let symbol = controls.gene.symbol();

    let scatter_rows = population
        .individuals
        .iter()
        .map(|i| {
            vec![
                i.plant_id as f64,
                f64::from(i.copy_number),
                i.tolerance_index,
                i.leaf_accumulation_ppm,
            ]
        })
        .collect();
    let box_rows = population
        .groups
        .iter()
        .map(|g| {
            let s = g.accumulation;
            vec![f64::from(g.copy_number), g.count as f64, s.min, s.q1, s.median, s.q3, s.max]
        })
        .collect();

    let mut page = RenderedPage::new(PageId::Genetics);
    page.heading("Genetics Explorer (CNV Analysis)")
        .markdown(
            "Correlation between **Gene Copy Number Variation (CNV)** and **Zinc Tolerance** \
             in *Noccaea caerulescens*.",
        )
        .notice(NoticeLevel::Info, MECHANISM)
        .metric("Candidate Gene", controls.gene.display_name())
        .metric("Population Size (n)", controls.population_size.to_string())
        .markdown(format!(
            "*{}* sequesters Zinc into the vacuole or pumps it out of roots to prevent toxicity. \
             **Hypothesis:** higher copy numbers of this gene = higher tolerance.",
            symbol
        ))
        .chart(
            Chart::new(
                "tolerance_correlation",
                ChartKind::Scatter,
                format!("Copy Number Variation vs. Tolerance ({})", symbol),
                "Gene Copy Number",
                "Zinc Tolerance Index",
            )
            .with_columns(&[
                "Plant ID",
                "Gene Copy Number",
                "Zinc Tolerance Index",
                "Leaf Zinc Accumulation (PPM)",
            ])
            .with_rows(scatter_rows)
            .with_trend(population.tolerance_trend),
        );

    if let Some(trend) = population.tolerance_trend {
        page.metric("Tolerance per extra copy", format!("{:+.1}", trend.slope))
            .metric("Trend R²", format!("{:.2}", trend.r_squared));
    }

    page.markdown(format!(
        "**Observation:** Individuals with high copy numbers of *{}* display significantly \
         higher tolerance to toxic Zinc levels.",
        symbol
    ))
    .chart(
        Chart::new(
            "leaf_accumulation",
            ChartKind::Box,
            "Leaf Zinc Concentration by Copy Number Group",
            "Gene Copy Number",
            "Leaf Zinc Accumulation (PPM)",
        )
        .with_columns(&["Gene Copy Number", "n", "min", "q1", "median", "q3", "max"])
        .with_rows(box_rows),
    )
    .divider()
    .markdown(PATHWAY);

    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::CandidateGene;

    fn controls(seed: u64) -> GeneticsControls {
        GeneticsControls {
            gene: CandidateGene::Hma4,
            population_size: 150,
            seed,
        }
    }

    #[test]
    fn test_session_is_reproducible() {
        assert_eq!(render(&controls(42)), render(&controls(42)));
        assert_ne!(render(&controls(42)), render(&controls(43)));
    }

    #[test]
    fn test_scatter_has_one_row_per_plant() {
        let page = render(&controls(42));
        let scatter = page.charts().find(|c| c.kind == ChartKind::Scatter).unwrap();
        assert_eq!(scatter.rows.len(), 150);
        assert_eq!(scatter.rows[0].len(), scatter.columns.len());
        assert!(scatter.title.ends_with("(HMA4)"));
        assert!(scatter.trend.is_some());
    }
}
