//! Media kind enumeration for compound (OLE2) containers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The application family a compound container belongs to.
///
/// Every container maps to exactly one kind; [`MediaKind::GenericOle`] is the
/// answer when nothing more specific can be said.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaKind {
    /// Microsoft Excel workbook (.xls)
    Spreadsheet,
    /// Microsoft Word document (.doc)
    WordProcessor,
    /// Microsoft PowerPoint presentation (.ppt)
    Presentation,
    /// Microsoft Publisher document (.pub)
    Publisher,
    /// Microsoft Project plan (.mpp)
    Project,
    /// Microsoft Visio drawing (.vsd)
    Drawing,
    /// Microsoft Works word processor document (.wps)
    WorksWordProcessor,
    /// Microsoft Works 7.0 spreadsheet (.xlr)
    WorksSpreadsheet,
    /// Microsoft Outlook message (.msg)
    MailMessage,
    /// OLE 1.0 native object embedded in another document
    Ole10NativeEmbedding,
    /// Some other embedded object described by a CompObj stream
    GenericCompObjEmbedding,
    /// StarOffice Calc spreadsheet (.sdc)
    StarCalc,
    /// StarOffice Writer document (.sdw)
    StarWriter,
    /// StarOffice Draw drawing (.sda)
    StarDraw,
    /// StarOffice Impress presentation (.sdd)
    StarImpress,
    /// An OLE2 container of no more specific kind
    GenericOle,
    /// A password protected OOXML package wrapped in an OLE2 container
    ProtectedOoxml,
    /// An Office document protected with DRM (Rights Management)
    DrmEncrypted,
    /// Microsoft Graph chart embedded in Excel or PowerPoint
    GraphChart,
    /// Equation Editor object embedded in an Office document
    Equation,
    /// SolidWorks part, assembly or drawing
    SolidWorks,
    /// ESRI ArcMap layer file (.lyr)
    EsriLayer,
    /// MicroStation V8 design file (.dgn)
    Dgn8,
}

impl MediaKind {
    /// All kinds, in declaration order.
    pub const ALL: [MediaKind; 23] = [
        MediaKind::Spreadsheet,
        MediaKind::WordProcessor,
        MediaKind::Presentation,
        MediaKind::Publisher,
        MediaKind::Project,
        MediaKind::Drawing,
        MediaKind::WorksWordProcessor,
        MediaKind::WorksSpreadsheet,
        MediaKind::MailMessage,
        MediaKind::Ole10NativeEmbedding,
        MediaKind::GenericCompObjEmbedding,
        MediaKind::StarCalc,
        MediaKind::StarWriter,
        MediaKind::StarDraw,
        MediaKind::StarImpress,
        MediaKind::GenericOle,
        MediaKind::ProtectedOoxml,
        MediaKind::DrmEncrypted,
        MediaKind::GraphChart,
        MediaKind::Equation,
        MediaKind::SolidWorks,
        MediaKind::EsriLayer,
        MediaKind::Dgn8,
    ];

    /// IANA (or de facto) media type string for this kind.
    pub const fn mime_type(self) -> &'static str {
        match self {
            MediaKind::Spreadsheet => "application/vnd.ms-excel",
            MediaKind::WordProcessor => "application/msword",
            MediaKind::Presentation => "application/vnd.ms-powerpoint",
            MediaKind::Publisher => "application/x-mspublisher",
            MediaKind::Project => "application/vnd.ms-project",
            MediaKind::Drawing => "application/vnd.visio",
            MediaKind::WorksWordProcessor => "application/vnd.ms-works",
            MediaKind::WorksSpreadsheet => "application/x-tika-msworks-spreadsheet",
            MediaKind::MailMessage => "application/vnd.ms-outlook",
            MediaKind::Ole10NativeEmbedding => {
                "application/x-tika-msoffice-embedded; format=ole10_native"
            },
            MediaKind::GenericCompObjEmbedding => {
                "application/x-tika-msoffice-embedded; format=comp_obj"
            },
            MediaKind::StarCalc => "application/vnd.stardivision.calc",
            MediaKind::StarWriter => "application/vnd.stardivision.writer",
            MediaKind::StarDraw => "application/vnd.stardivision.draw",
            MediaKind::StarImpress => "application/vnd.stardivision.impress",
            MediaKind::GenericOle => "application/x-tika-msoffice",
            MediaKind::ProtectedOoxml => "application/x-tika-ooxml-protected",
            MediaKind::DrmEncrypted => "application/x-tika-ole-drm-encrypted",
            MediaKind::GraphChart => "application/vnd.ms-graph",
            MediaKind::Equation => "application/vnd.ms-equation",
            MediaKind::SolidWorks => "application/sldworks",
            MediaKind::EsriLayer => "application/x-esri-layer",
            MediaKind::Dgn8 => "image/vnd.dgn; version=8",
        }
    }

    /// Conventional file extension (without the dot), if the kind has one.
    pub const fn extension(self) -> Option<&'static str> {
        match self {
            MediaKind::Spreadsheet => Some("xls"),
            MediaKind::WordProcessor => Some("doc"),
            MediaKind::Presentation => Some("ppt"),
            MediaKind::Publisher => Some("pub"),
            MediaKind::Project => Some("mpp"),
            MediaKind::Drawing => Some("vsd"),
            MediaKind::WorksWordProcessor => Some("wps"),
            MediaKind::WorksSpreadsheet => Some("xlr"),
            MediaKind::MailMessage => Some("msg"),
            MediaKind::Ole10NativeEmbedding
            | MediaKind::GenericCompObjEmbedding
            | MediaKind::ProtectedOoxml
            | MediaKind::DrmEncrypted => Some("ole"),
            MediaKind::StarCalc => Some("sdc"),
            MediaKind::StarWriter => Some("sdw"),
            MediaKind::StarDraw => Some("sda"),
            MediaKind::StarImpress => Some("sdd"),
            MediaKind::SolidWorks => Some("sldprt"),
            MediaKind::EsriLayer => Some("lyr"),
            MediaKind::Dgn8 => Some("dgn"),
            MediaKind::GenericOle | MediaKind::GraphChart | MediaKind::Equation => None,
        }
    }

    /// Look a kind up by its media type string.
    ///
    /// Parameters are compared after stripping whitespace, so
    /// `"image/vnd.dgn;version=8"` also matches [`MediaKind::Dgn8`].
    pub fn from_mime_type(mime: &str) -> Option<MediaKind> {
        let wanted = normalize_mime(mime);
        MediaKind::ALL
            .into_iter()
            .find(|kind| normalize_mime(kind.mime_type()) == wanted)
    }

    /// Check whether this kind describes an object embedded inside another
    /// document rather than a standalone file.
    #[inline]
    pub fn is_embedded_object(self) -> bool {
        matches!(
            self,
            MediaKind::Ole10NativeEmbedding
                | MediaKind::GenericCompObjEmbedding
                | MediaKind::GraphChart
                | MediaKind::Equation
        )
    }

    /// Check whether the container holds encrypted content.
    #[inline]
    pub fn is_encrypted(self) -> bool {
        matches!(self, MediaKind::ProtectedOoxml | MediaKind::DrmEncrypted)
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime_type())
    }
}

fn normalize_mime(mime: &str) -> String {
    mime.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
