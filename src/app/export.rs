use crate::domain::model::RacketSummary;
use crate::utils::error::{Result, SmashlyError};

pub fn to_json(rackets: &[RacketSummary]) -> Result<String> {
    Ok(serde_json::to_string_pretty(rackets)?)
}

/// 每支球拍一列，圖片以 `|` 串接
pub fn to_csv(rackets: &[RacketSummary]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["id", "nombre", "marca", "precio_actual", "imagenes"])?;

    for racket in rackets {
        writer.write_record([
            racket.id.as_ref().map(|id| id.to_string()).unwrap_or_default(),
            racket.nombre.clone(),
            racket.marca.clone().unwrap_or_default(),
            racket
                .precio_actual
                .map(|p| p.to_string())
                .unwrap_or_default(),
            racket.imagenes.join("|"),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| SmashlyError::IoError(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| SmashlyError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}
