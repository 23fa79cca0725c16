//! Spanish/English string tables and the [`Localizer`] that reads them.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::connectivity::SyncNotification;
use super::wizard::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Es,
    En,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Es => "Español",
            Language::En => "English",
        }
    }

    pub fn all() -> Vec<Language> {
        vec![Language::Es, Language::En]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "es" => Some(Language::Es),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    /// The other language, for the header toggle
    pub fn toggled(&self) -> Self {
        match self {
            Language::Es => Language::En,
            Language::En => Language::Es,
        }
    }
}

static ES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("auth.login", "Iniciar sesión"),
        ("auth.email", "Correo electrónico"),
        ("auth.password", "Contraseña"),
        ("auth.logout", "Cerrar sesión"),
        ("auth.invalid", "Ingrese correo y contraseña"),
        ("nav.dashboard", "Dashboard"),
        ("nav.sop1", "SOP 1 - Cotizaciones"),
        ("nav.sop2", "SOP 2 - Requisiciones"),
        ("nav.sop3", "SOP 3 - Control Material"),
        ("nav.sop4", "SOP 4 - Préstamo Demo"),
        ("nav.sop5", "SOP 5 - Soporte y Servicios"),
        ("nav.fsap", "F-SAP - Salida de Material"),
        ("nav.fdem", "F-DEM - Solicitud Demo"),
        ("nav.checklists", "Checklists FAT/SAT"),
        ("nav.admin", "Administración"),
        ("nav.sops", "Procedimientos SOP"),
        ("nav.formats", "Formatos"),
        ("dashboard.welcome", "Bienvenido"),
        ("dashboard.kpi.pending", "Pendientes"),
        ("dashboard.kpi.completed", "Completados"),
        ("dashboard.kpi.inProgress", "En Progreso"),
        ("dashboard.kpi.overdue", "Fuera de SLA"),
        ("dashboard.submissions", "Registros enviados"),
        ("sop1.title", "Cotizaciones"),
        ("sop1.subtitle", "Distribución, proyectos y componentes"),
        ("sop1.new", "Nueva Cotización"),
        ("sop2.title", "Requisiciones"),
        ("sop2.subtitle", "Canal único de materiales/servicios"),
        ("sop2.new", "Nueva Requisición"),
        ("sop3.title", "Control de Material"),
        ("sop3.subtitle", "Descarga a costo para proyectos"),
        ("sop3.new", "Nueva Descarga"),
        ("sop4.title", "Préstamo Demo"),
        ("sop4.subtitle", "4 UR5e, 1 MiR250 Shelf, 1 MiR100"),
        ("sop4.new", "Nuevo Préstamo"),
        ("sop5.title", "Soporte y Servicios"),
        ("sop5.subtitle", "Preventa, postventa y mantenimientos"),
        ("sop5.new", "Nuevo Ticket"),
        ("fsap.title", "Salida de Material"),
        ("fsap.subtitle", "Formato F-SAP"),
        ("fsap.new", "Nueva Salida"),
        ("fdem.title", "Solicitud de Préstamo Demo"),
        ("fdem.subtitle", "Formato F-DEM"),
        ("fdem.new", "Nueva Solicitud"),
        ("checklists.title", "Checklists FAT/SAT"),
        ("checklists.subtitle", "Pruebas de aceptación en fábrica y en sitio"),
        ("checklists.all", "Todos"),
        ("checklists.fat", "FAT"),
        ("checklists.sat", "SAT"),
        ("checklists.notes", "Notas"),
        ("checklists.progress", "Progreso"),
        ("checklists.autosaved", "Borrador guardado"),
        ("status.draft", "Borrador"),
        ("status.pending", "Pendiente"),
        ("status.inProgress", "En Progreso"),
        ("status.approved", "Aprobado"),
        ("status.rejected", "Rechazado"),
        ("status.completed", "Completado"),
        ("status.blocked", "Bloqueado"),
        ("form.save", "Guardar"),
        ("form.cancel", "Cancelar"),
        ("form.submit", "Enviar"),
        ("form.next", "Siguiente"),
        ("form.previous", "Anterior"),
        ("form.saveDraft", "Guardar borrador"),
        ("form.draftRestored", "Borrador restaurado"),
        ("form.submitting", "Enviando..."),
        ("form.required", "Campo requerido"),
        ("form.invalid_email", "Correo electrónico no válido"),
        ("form.not_positive", "Debe ser mayor a cero"),
        ("form.success", "Guardado exitosamente"),
        ("form.error", "No se pudo guardar"),
        ("form.step", "Paso"),
        ("connection.offline", "Modo sin conexión - los cambios se sincronizarán al reconectarse"),
        ("connection.online", "Conexión restaurada"),
        ("connection.synced", "registros sincronizados"),
        ("connection.pending", "pendientes de sincronizar"),
        ("sla.green", "En tiempo"),
        ("sla.yellow", "En riesgo"),
        ("sla.red", "Fuera de SLA"),
        ("sla.unconfigured", "SLA sin configurar"),
        ("common.search", "Buscar"),
        ("common.filter", "Filtrar"),
        ("common.export", "Exportar"),
        ("common.date", "Fecha"),
        ("common.status", "Estado"),
        ("common.actions", "Acciones"),
        ("common.loading", "Cargando..."),
        ("common.empty", "Sin registros"),
        ("common.folio", "Folio"),
        ("common.description", "Descripción"),
        ("common.sla", "SLA"),
        ("common.kpi", "KPI"),
        ("common.objective", "Objetivo"),
        ("common.scope", "Alcance"),
    ])
});

static EN: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("auth.login", "Log In"),
        ("auth.email", "Email"),
        ("auth.password", "Password"),
        ("auth.logout", "Log Out"),
        ("auth.invalid", "Enter email and password"),
        ("nav.dashboard", "Dashboard"),
        ("nav.sop1", "SOP 1 - Quotations"),
        ("nav.sop2", "SOP 2 - Requisitions"),
        ("nav.sop3", "SOP 3 - Material Control"),
        ("nav.sop4", "SOP 4 - Demo Loan"),
        ("nav.sop5", "SOP 5 - Support & Services"),
        ("nav.fsap", "F-SAP - Material Exit"),
        ("nav.fdem", "F-DEM - Demo Request"),
        ("nav.checklists", "FAT/SAT Checklists"),
        ("nav.admin", "Administration"),
        ("nav.sops", "SOP Procedures"),
        ("nav.formats", "Forms"),
        ("dashboard.welcome", "Welcome"),
        ("dashboard.kpi.pending", "Pending"),
        ("dashboard.kpi.completed", "Completed"),
        ("dashboard.kpi.inProgress", "In Progress"),
        ("dashboard.kpi.overdue", "Out of SLA"),
        ("dashboard.submissions", "Submitted records"),
        ("sop1.title", "Quotations"),
        ("sop1.subtitle", "Distribution, projects and components"),
        ("sop1.new", "New Quotation"),
        ("sop2.title", "Requisitions"),
        ("sop2.subtitle", "Single channel for materials/services"),
        ("sop2.new", "New Requisition"),
        ("sop3.title", "Material Control"),
        ("sop3.subtitle", "Cost discharge for projects"),
        ("sop3.new", "New Discharge"),
        ("sop4.title", "Demo Loan"),
        ("sop4.subtitle", "4 UR5e, 1 MiR250 Shelf, 1 MiR100"),
        ("sop4.new", "New Loan"),
        ("sop5.title", "Support & Services"),
        ("sop5.subtitle", "Pre-sale, post-sale and maintenance"),
        ("sop5.new", "New Ticket"),
        ("fsap.title", "Material Exit"),
        ("fsap.subtitle", "F-SAP form"),
        ("fsap.new", "New Exit"),
        ("fdem.title", "Demo Loan Request"),
        ("fdem.subtitle", "F-DEM form"),
        ("fdem.new", "New Request"),
        ("checklists.title", "FAT/SAT Checklists"),
        ("checklists.subtitle", "Factory and site acceptance tests"),
        ("checklists.all", "All"),
        ("checklists.fat", "FAT"),
        ("checklists.sat", "SAT"),
        ("checklists.notes", "Notes"),
        ("checklists.progress", "Progress"),
        ("checklists.autosaved", "Draft saved"),
        ("status.draft", "Draft"),
        ("status.pending", "Pending"),
        ("status.inProgress", "In Progress"),
        ("status.approved", "Approved"),
        ("status.rejected", "Rejected"),
        ("status.completed", "Completed"),
        ("status.blocked", "Blocked"),
        ("form.save", "Save"),
        ("form.cancel", "Cancel"),
        ("form.submit", "Submit"),
        ("form.next", "Next"),
        ("form.previous", "Previous"),
        ("form.saveDraft", "Save draft"),
        ("form.draftRestored", "Draft restored"),
        ("form.submitting", "Submitting..."),
        ("form.required", "Required field"),
        ("form.invalid_email", "Invalid email address"),
        ("form.not_positive", "Must be greater than zero"),
        ("form.success", "Saved successfully"),
        ("form.error", "Could not save"),
        ("form.step", "Step"),
        ("connection.offline", "Offline mode - changes will sync when reconnected"),
        ("connection.online", "Connection restored"),
        ("connection.synced", "records synced"),
        ("connection.pending", "pending sync"),
        ("sla.green", "On time"),
        ("sla.yellow", "At risk"),
        ("sla.red", "Out of SLA"),
        ("sla.unconfigured", "SLA not configured"),
        ("common.search", "Search"),
        ("common.filter", "Filter"),
        ("common.export", "Export"),
        ("common.date", "Date"),
        ("common.status", "Status"),
        ("common.actions", "Actions"),
        ("common.loading", "Loading..."),
        ("common.empty", "No records"),
        ("common.folio", "Folio"),
        ("common.description", "Description"),
        ("common.sla", "SLA"),
        ("common.kpi", "KPI"),
        ("common.objective", "Objective"),
        ("common.scope", "Scope"),
    ])
});

fn table(language: Language) -> &'static HashMap<&'static str, &'static str> {
    match language {
        Language::Es => &*ES,
        Language::En => &*EN,
    }
}

/// Translates keys for one language. Unknown keys come back unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Localizer {
    language: Language,
}

impl Localizer {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        table(self.language).get(key).copied().unwrap_or(key)
    }

    pub fn validation(&self, error: ValidationError) -> &'static str {
        self.t(error.message_key())
    }

    /// "Conexión restaurada - 3 registros sincronizados"
    pub fn sync_message(&self, notification: &SyncNotification) -> String {
        format!(
            "{} - {} {}",
            self.t("connection.online"),
            notification.synced_count,
            self.t("connection.synced")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_share_keys() {
        let mut es: Vec<_> = ES.keys().collect();
        let mut en: Vec<_> = EN.keys().collect();
        es.sort();
        en.sort();
        assert_eq!(es, en);
    }

    #[test]
    fn test_lookup_and_fallback() {
        let es = Localizer::new(Language::Es);
        let en = Localizer::new(Language::En);
        assert_eq!(es.t("form.required"), "Campo requerido");
        assert_eq!(en.t("form.required"), "Required field");
        assert_eq!(en.t("no.such.key"), "no.such.key");
        assert_eq!(es.validation(ValidationError::InvalidEmail), "Correo electrónico no válido");
    }

    #[test]
    fn test_sync_message() {
        let en = Localizer::new(Language::En);
        let msg = en.sync_message(&SyncNotification { synced_count: 3 });
        assert_eq!(msg, "Connection restored - 3 records synced");
    }

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::from_code(" EN "), Some(Language::En));
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::Es.toggled(), Language::En);
        assert_eq!(Language::default(), Language::Es);
    }
}
