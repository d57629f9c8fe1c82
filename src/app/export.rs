//! Save the displayed class and liquids as a standalone HTML page

use super::App;
use crate::html;
use crate::utils::export_file_name;
use tracing::{error, info};

impl App {
    pub(crate) fn export_html(&mut self) {
        let class = self.view.selection.class();
        let Some(path) = rfd::FileDialog::new()
            .set_file_name(export_file_name(class.map(|c| c.name.as_str())))
            .add_filter("HTML", &["html", "htm"])
            .save_file()
        else {
            return;
        };

        let generated = chrono::Local::now().format("%Y-%m-%d %H:%M").to_string();
        let document = html::render_document(class, self.view.liquids(), &generated);

        match std::fs::write(&path, document) {
            Ok(()) => {
                info!(path = %path.display(), liquids = self.view.liquids().len(), "Exported HTML");
                self.show_toast("Exported liquid table", false);
                if let Err(e) = open::that(&path) {
                    error!(error = %e, path = %path.display(), "Failed to open export");
                }
            }
            Err(e) => {
                error!(error = %e, path = %path.display(), "Failed to write export");
                self.show_toast(format!("Export failed: {}", e), true);
            }
        }
    }
}
