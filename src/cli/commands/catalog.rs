use crate::catalog::Catalog;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::Category;
use crate::utils::formatting::truncate;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Catalog { category } = cmd {
        let catalog = Catalog::load(cfg.catalog.as_deref())?;

        let mut table = Table::new(vec![
            Column::new("ID"),
            Column::new(""),
            Column::new("CATEGORY"),
            Column::new("EXCUSE"),
        ]);

        for r in catalog
            .records()
            .iter()
            .filter(|r| category.is_none_or(|c| r.category == c))
        {
            table.add_row(vec![
                r.id.clone(),
                r.icon.clone(),
                r.category.to_string(),
                truncate(&r.text, 70),
            ]);
        }

        print!("{}", table.render());

        let per_category: Vec<String> = Category::ALL
            .iter()
            .map(|c| format!("{} {}", c, catalog.by_category(*c).count()))
            .collect();
        println!(
            "\n📚 {} excuses ({})",
            catalog.len(),
            per_category.join(", ")
        );
    }

    Ok(())
}
