// Eternity II piece catalog.
// Each code lists the motif keys clockwise from the top: UP, RIGHT, DOWN, LEFT.
// Piece ids are the positions in PIECE_CODES.
use std::sync::OnceLock;

use crate::edges::{Edges, PieceClass, classify};
use crate::error::EditorError;

pub static PIECE_CODES: [&str; 256] = [
    "aabd", "aabe", "aacd", "aadc", "abgb", "abhc", "abjb", "abjf", "abmd", "aboe",
    "abpc", "abte", "abtf", "abve", "achb", "acid", "ackf", "acnf", "acoc", "acpc",
    "acqe", "acrb", "acrf", "acsb", "acvb", "adgc", "adgd", "adhd", "adid", "adof",
    "adpc", "adsd", "adtc", "adte", "aduf", "adwe", "aeib", "aelf", "aemf", "aenc",
    "aend", "aepb", "aepc", "aepd", "aeqb", "aese", "aete", "aeue", "afgf", "afhb",
    "afhc", "afjb", "afoe", "afqe", "afqf", "aftd", "afub", "afuf", "afvc", "afwd",
    "ggji", "ggko", "ghhl", "gigt", "giiw", "gikk", "gimh", "gisj", "giwt", "gllo",
    "glor", "gmki", "gmpq", "gmsp", "gmtl", "gnkp", "gnnp", "golu", "gosl", "gouv",
    "gpni", "gqii", "gqmq", "grin", "grjk", "grtr", "grus", "gsgv", "gsjw", "gsqu",
    "gtmr", "gtnp", "gtnq", "gtqv", "gtrk", "gvvl", "gwqn", "gwst", "gwvj", "gwwv",
    "hhrp", "hhru", "hhun", "hhwj", "hiqp", "hjlt", "hjnt", "hjqp", "hjum", "hkpr",
    "hkrp", "hlsn", "hlsu", "hmkq", "hmor", "hmrm", "hmwu", "hnlv", "hour", "hptw",
    "hqkw", "hsju", "hskn", "hssp", "htrw", "htvp", "hukj", "hunv", "huql", "hust",
    "hvjs", "hvrk", "hwku", "hwmq", "hwql", "hwus", "iiso", "ijjl", "ijjm", "ijjr",
    "ijnv", "ijpj", "ijur", "ijvv", "iklq", "ilir", "iliw", "illk", "ilpr", "injm",
    "inqw", "iomm", "iomn", "iowu", "iqoo", "iqor", "iqwo", "isou", "istj", "itvv",
    "iujs", "iuks", "iwpm", "iwqu", "jklq", "jkqt", "jmll", "jnmp", "jnnv", "joqt",
    "josu", "jovm", "jppp", "jprs", "jqov", "jron", "jskq", "jtru", "jttp", "juou",
    "jvmu", "jvom", "kknt", "klwo", "kmnr", "kmtt", "knvo", "kokv", "koln", "koun",
    "kpll", "kpps", "kqmo", "krvm", "krvw", "krwp", "ksmw", "ksnt", "ksss", "ktnl",
    "kuvt", "kuwo", "kvrn", "kvrt", "kvul", "kvwv", "llwo", "lmnw", "lmtp", "lomn",
    "loup", "lplu", "lqtt", "lrls", "lrqw", "lrwv", "lsnp", "luqr", "lvmq", "lwmu",
    "lwvv", "lwvw", "mmrw", "mmso", "mmup", "monp", "morr", "mqnt", "msow", "msut",
    "mtrs", "mtrv", "nnns", "nouq", "nqoq", "nqos", "nqrp", "nrqu", "nspw", "nsvp",
    "ntov", "ntqv", "oppr", "opst", "oqws", "ovuw", "ppvw", "pqrq", "prqv", "psuv",
    "qqwt", "qrtr", "rtus", "suvu", "swuw", "twvw",
];

/// A catalog piece: immutable id and canonical edges, plus its cached class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    pub id: u32,
    pub edges: Edges,
    pub class: PieceClass,
}

impl Piece {
    pub fn new(id: u32, edges: Edges) -> Self {
        Self { id, edges, class: classify(&edges) }
    }

    /// Build a piece from a four-letter code such as `"aabd"`.
    pub fn from_code(id: u32, code: &str) -> Result<Self, EditorError> {
        Ok(Self::new(id, parse_edges(code)?))
    }

    /// The four-letter code of the canonical edges.
    pub fn code(&self) -> String {
        self.edges.iter().collect()
    }
}

/// Parse a four-character edge code into `[top, right, bottom, left]`.
pub fn parse_edges(code: &str) -> Result<Edges, EditorError> {
    let mut chars = code.chars();
    let mut edges = [' '; 4];
    for slot in &mut edges {
        let c = chars
            .next()
            .ok_or_else(|| EditorError::BadPieceCode(code.to_owned()))?;
        if !c.is_ascii_alphanumeric() {
            return Err(EditorError::BadPieceCode(code.to_owned()));
        }
        *slot = c;
    }
    if chars.next().is_some() {
        return Err(EditorError::BadPieceCode(code.to_owned()));
    }
    Ok(edges)
}

fn build_catalog() -> Vec<Piece> {
    PIECE_CODES
        .iter()
        .zip(0u32..)
        .filter_map(|(code, id)| match Piece::from_code(id, code) {
            Ok(piece) => Some(piece),
            Err(err) => {
                log::error!("skipping catalog entry {id}: {err}");
                None
            }
        })
        .collect()
}

/// The full static piece set, built on first use.
pub fn catalog() -> &'static [Piece] {
    static CATALOG: OnceLock<Vec<Piece>> = OnceLock::new();
    CATALOG.get_or_init(build_catalog)
}

/// Look up a catalog piece by id.
pub fn piece(id: u32) -> Option<&'static Piece> {
    catalog().get(id as usize).filter(|p| p.id == id)
}
