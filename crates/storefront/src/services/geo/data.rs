//! Static catalog of Colombian departments and their main municipalities.
//!
//! Codes are DANE codes. Cities reference their department by code.

/// `(code, name)` for each department served by the marketplace.
pub(super) const DEPARTMENTS: &[(&str, &str)] = &[
    ("05", "Antioquia"),
    ("08", "Atlántico"),
    ("11", "Bogotá D.C."),
    ("13", "Bolívar"),
    ("15", "Boyacá"),
    ("17", "Caldas"),
    ("18", "Caquetá"),
    ("19", "Cauca"),
    ("20", "Cesar"),
    ("23", "Córdoba"),
    ("25", "Cundinamarca"),
    ("27", "Chocó"),
    ("41", "Huila"),
    ("44", "La Guajira"),
    ("47", "Magdalena"),
    ("50", "Meta"),
    ("52", "Nariño"),
    ("54", "Norte de Santander"),
    ("63", "Quindío"),
    ("66", "Risaralda"),
    ("68", "Santander"),
    ("70", "Sucre"),
    ("73", "Tolima"),
    ("76", "Valle del Cauca"),
];

/// `(code, name, department code)` for each municipality.
pub(super) const CITIES: &[(&str, &str, &str)] = &[
    ("05001", "Medellín", "05"),
    ("05088", "Bello", "05"),
    ("05266", "Envigado", "05"),
    ("05360", "Itagüí", "05"),
    ("05615", "Rionegro", "05"),
    ("08001", "Barranquilla", "08"),
    ("08758", "Soledad", "08"),
    ("08433", "Malambo", "08"),
    ("11001", "Bogotá D.C.", "11"),
    ("13001", "Cartagena de Indias", "13"),
    ("13430", "Magangué", "13"),
    ("13836", "Turbaco", "13"),
    ("15001", "Tunja", "15"),
    ("15238", "Duitama", "15"),
    ("15759", "Sogamoso", "15"),
    ("17001", "Manizales", "17"),
    ("17380", "La Dorada", "17"),
    ("18001", "Florencia", "18"),
    ("19001", "Popayán", "19"),
    ("19698", "Santander de Quilichao", "19"),
    ("20001", "Valledupar", "20"),
    ("20011", "Aguachica", "20"),
    ("23001", "Montería", "23"),
    ("23417", "Lorica", "23"),
    ("25754", "Soacha", "25"),
    ("25899", "Zipaquirá", "25"),
    ("25269", "Facatativá", "25"),
    ("25175", "Chía", "25"),
    ("27001", "Quibdó", "27"),
    ("41001", "Neiva", "41"),
    ("41551", "Pitalito", "41"),
    ("44001", "Riohacha", "44"),
    ("44430", "Maicao", "44"),
    ("47001", "Santa Marta", "47"),
    ("47189", "Ciénaga", "47"),
    ("50001", "Villavicencio", "50"),
    ("50006", "Acacías", "50"),
    ("52001", "Pasto", "52"),
    ("52356", "Ipiales", "52"),
    ("52835", "Tumaco", "52"),
    ("54001", "Cúcuta", "54"),
    ("54498", "Ocaña", "54"),
    ("63001", "Armenia", "63"),
    ("63130", "Calarcá", "63"),
    ("66001", "Pereira", "66"),
    ("66170", "Dosquebradas", "66"),
    ("68001", "Bucaramanga", "68"),
    ("68276", "Floridablanca", "68"),
    ("68081", "Barrancabermeja", "68"),
    ("70001", "Sincelejo", "70"),
    ("70215", "Corozal", "70"),
    ("73001", "Ibagué", "73"),
    ("73268", "Espinal", "73"),
    ("76001", "Cali", "76"),
    ("76520", "Palmira", "76"),
    ("76109", "Buenaventura", "76"),
    ("76834", "Tuluá", "76"),
];
