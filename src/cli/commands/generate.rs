use crate::catalog::Catalog;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::generate::{GenerateControl, GenerateRequest, Outcome, run_cycle};
use crate::core::timer::OneShotTimer;
use crate::core::{AppState, RandomSource, SeededRandom, ThreadRandom};
use crate::db::store::{KvStore, open_or_memory};
use crate::errors::AppResult;
use crate::ui::clipboard::{SystemClipboard, copy_text};
use crate::ui::render::render_card;
use crate::utils::time::now_millis;
use std::time::Duration;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Generate {
        count,
        category,
        seed,
        copy,
        no_delay,
    } = cmd
    {
        // A broken catalog stops here, before anything is read or written.
        let catalog = Catalog::load(cfg.catalog.as_deref())?;

        let mut store = open_or_memory(&cfg.database);
        let mut state = AppState::load(&*store);

        let mut rng: Box<dyn RandomSource> = match seed {
            Some(s) => Box::new(SeededRandom::new(*s)),
            None => Box::new(ThreadRandom),
        };

        let delay = if *no_delay {
            Duration::ZERO
        } else {
            Duration::from_millis(cfg.delay_ms)
        };

        let request = GenerateRequest {
            catalog: &catalog,
            category: category.or(cfg.default_category),
        };
        let mut control = GenerateControl::new();

        for _ in 0..*count {
            let timer = OneShotTimer::new(delay);
            let outcome = run_cycle(
                &mut control,
                timer,
                &mut state,
                &request,
                rng.as_mut(),
                &now_millis,
            )?;

            if let Outcome::Completed(excuse) = outcome {
                state.persist_history(&mut *store);
                store.log("generate", &excuse.id, &excuse.text);
                print!("{}", render_card(&excuse, state.theme));
            }
        }

        if *copy && let Some(current) = &state.current {
            copy_text(&mut SystemClipboard, &current.text, &*store);
        }
    }

    Ok(())
}
