use crate::app::{export, view};
use crate::config::cli::{Command, ExportFormat};
use crate::core::store::ComparisonStore;
use crate::core::{CatalogSource, Notifier, RacketQuery, RacketSummary};
use crate::utils::error::{Result, SmashlyError};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Success,
    /// 操作被規則拒絕，或 `contains` 查無此拍
    Rejected,
}

impl CommandOutcome {
    pub fn exit_code(self) -> i32 {
        match self {
            CommandOutcome::Success => 0,
            CommandOutcome::Rejected => 1,
        }
    }
}

/// CLI 的消費端：持有比較清單並把子命令轉成對它的操作
pub struct SmashlyApp<N: Notifier, C: CatalogSource> {
    store: ComparisonStore<N>,
    catalog: C,
}

impl<N: Notifier, C: CatalogSource> SmashlyApp<N, C> {
    pub fn new(store: ComparisonStore<N>, catalog: C) -> Self {
        Self { store, catalog }
    }

    pub fn store(&self) -> &ComparisonStore<N> {
        &self.store
    }

    pub async fn run<W: Write>(&mut self, command: Command, out: &mut W) -> Result<CommandOutcome> {
        match command {
            Command::Show => {
                self.write_overview(out)?;
                Ok(CommandOutcome::Success)
            }
            Command::Add {
                nombre,
                offline,
                marca,
                precio,
            } => {
                let racket = if offline {
                    let mut racket = RacketSummary::new(nombre);
                    racket.marca = marca;
                    racket.precio_actual = precio;
                    racket
                } else {
                    self.resolve(&nombre).await?
                };

                let added = racket.nombre.clone();
                if self.store.add_racket(racket) {
                    tracing::info!("✅ '{}' added to comparison", added);
                    writeln!(out, "✅ \"{}\" añadida a la comparación", added)?;
                    self.write_badge(out)?;
                    Ok(CommandOutcome::Success)
                } else {
                    Ok(CommandOutcome::Rejected)
                }
            }
            Command::Remove { nombre } => {
                self.store.remove_racket(&nombre);
                self.write_badge(out)?;
                Ok(CommandOutcome::Success)
            }
            Command::Clear => {
                self.store.clear_comparison();
                writeln!(out, "Comparación vaciada")?;
                Ok(CommandOutcome::Success)
            }
            Command::Contains { nombre } => {
                if self.store.is_racket_in_comparison(&nombre) {
                    writeln!(out, "sí")?;
                    Ok(CommandOutcome::Success)
                } else {
                    writeln!(out, "no")?;
                    Ok(CommandOutcome::Rejected)
                }
            }
            Command::Catalog {
                marca,
                search,
                limit,
            } => {
                let query = RacketQuery {
                    marca,
                    search,
                    limit,
                };
                let rackets = self.catalog.list_rackets(&query).await?;
                for racket in rackets {
                    let marker = if self.store.is_racket_in_comparison(&racket.nombre) {
                        "*"
                    } else {
                        " "
                    };
                    writeln!(
                        out,
                        "{} {} ({}) {}",
                        marker,
                        racket.nombre,
                        racket.marca.as_deref().unwrap_or("-"),
                        view::format_price(racket.precio_actual)
                    )?;
                }
                Ok(CommandOutcome::Success)
            }
            Command::Export { format, output } => {
                let content = match format {
                    ExportFormat::Json => export::to_json(self.store.rackets())?,
                    ExportFormat::Csv => export::to_csv(self.store.rackets())?,
                };
                match output {
                    Some(path) => {
                        std::fs::write(&path, content)?;
                        tracing::info!("📁 Comparison exported to: {}", path);
                    }
                    None => writeln!(out, "{}", content)?,
                }
                Ok(CommandOutcome::Success)
            }
        }
    }

    async fn resolve(&self, nombre: &str) -> Result<RacketSummary> {
        match self.catalog.find_by_name(nombre).await? {
            Some(racket) => Ok(racket.into()),
            None => Err(SmashlyError::RacketNotFound {
                nombre: nombre.to_string(),
            }),
        }
    }

    fn write_badge<W: Write>(&self, out: &mut W) -> Result<()> {
        if let Some(badge) = view::render_badge(self.store.count()) {
            writeln!(out, "{}", badge)?;
        }
        Ok(())
    }

    fn write_overview<W: Write>(&self, out: &mut W) -> Result<()> {
        self.write_badge(out)?;
        writeln!(out, "{}", view::render_comparison(self.store.rackets()))?;
        Ok(())
    }
}
