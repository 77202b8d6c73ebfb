use std::sync::Arc;

use tokio::sync::OnceCell;

use shared_config::AppConfig;

use crate::models::OcrError;

/// A text-recognition backend. Recognition is CPU-bound and synchronous;
/// callers run it on a blocking task.
pub trait OcrEngine: Send + Sync {
    fn recognize(&self, image: &[u8]) -> Result<String, OcrError>;
}

/// The one engine instance for the whole process. Initialization is lazy
/// and coalesced: concurrent first callers all await the same in-flight
/// initialization instead of racing. A failed initialization leaves the
/// cell empty, so a later request retries.
static ENGINE: OnceCell<Arc<dyn OcrEngine>> = OnceCell::const_new();

pub async fn shared_engine(config: &AppConfig) -> Result<Arc<dyn OcrEngine>, OcrError> {
    let engine = ENGINE.get_or_try_init(|| async { build(config) }).await?;
    Ok(Arc::clone(engine))
}

/// Decode-and-recognize step shared by the handler and tests: runs the
/// engine on a blocking task and trims the recognized text.
pub async fn run_recognition(
    engine: Arc<dyn OcrEngine>,
    image: Vec<u8>,
) -> Result<String, OcrError> {
    let text = tokio::task::spawn_blocking(move || engine.recognize(&image))
        .await
        .map_err(|e| OcrError::Recognition(e.to_string()))??;
    Ok(text.trim().to_string())
}

#[cfg(feature = "tesseract")]
fn build(config: &AppConfig) -> Result<Arc<dyn OcrEngine>, OcrError> {
    Ok(Arc::new(tess::TesseractEngine::new(&config.tessdata_dir)?))
}

#[cfg(not(feature = "tesseract"))]
fn build(_config: &AppConfig) -> Result<Arc<dyn OcrEngine>, OcrError> {
    Err(OcrError::EngineUnavailable)
}

#[cfg(feature = "tesseract")]
mod tess {
    use std::path::PathBuf;

    use super::OcrEngine;
    use crate::models::OcrError;

    /// Tesseract with English traineddata from the configured tessdata
    /// directory. A fresh `Tesseract` is built per recognition; the binding
    /// consumes itself on each call and initialization is cheap next to the
    /// recognition itself.
    pub struct TesseractEngine {
        tessdata_dir: PathBuf,
    }

    impl TesseractEngine {
        pub fn new(tessdata_dir: &str) -> Result<Self, OcrError> {
            let dir = PathBuf::from(tessdata_dir);
            if !dir.join("eng.traineddata").exists() {
                return Err(OcrError::Init(format!(
                    "eng.traineddata not found in {}",
                    dir.display()
                )));
            }
            Ok(Self { tessdata_dir: dir })
        }
    }

    impl OcrEngine for TesseractEngine {
        fn recognize(&self, image: &[u8]) -> Result<String, OcrError> {
            let tessdata = self
                .tessdata_dir
                .to_str()
                .ok_or_else(|| OcrError::Init("invalid tessdata path".to_string()))?;

            let tess = tesseract::Tesseract::new(Some(tessdata), Some("eng"))
                .map_err(|e| OcrError::Init(format!("{e:?}")))?;
            let mut tess = tess
                .set_image_from_mem(image)
                .map_err(|e| OcrError::Recognition(format!("{e:?}")))?;

            tess.get_text()
                .map_err(|e| OcrError::Recognition(format!("{e:?}")))
        }
    }
}

/// Engine that recognizes everything as one fixed string. Lets handler and
/// pipeline tests run without a Tesseract installation.
pub struct FixedTextEngine {
    pub text: String,
}

impl FixedTextEngine {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

impl OcrEngine for FixedTextEngine {
    fn recognize(&self, _image: &[u8]) -> Result<String, OcrError> {
        Ok(self.text.clone())
    }
}
