//! Tabulated light-collection profiles.
//!
//! Each curve holds 99 samples spanning the module half-opening from -pi/64
//! (first sample) to +pi/64 (last sample). The far-side fibre runs along the
//! +x edge, so every curve peaks there at exactly 1.0.

/// Samples per profile curve.
pub const PROFILE_BINS: usize = 99;

/// Radius of each depth row (mm), innermost row first.
pub const ROW_RADII_MM: [f64; 11] = [
    2348.5, 2448.5, 2548.5, 2663.5, 2793.5, 2923.5, 3063.5, 3213.5, 3363.5, 3533.5, 3723.5,
];

#[rustfmt::skip]
pub const LONG_A: [f64; PROFILE_BINS] = [
    0.84390, 0.84066, 0.83749, 0.83441, 0.83141, 0.82849, 0.82565, 0.82290, 0.82022,
    0.81763, 0.81511, 0.81268, 0.81033, 0.80806, 0.80587, 0.80377, 0.80174, 0.79980,
    0.79793, 0.79615, 0.79445, 0.79283, 0.79129, 0.78984, 0.78846, 0.78717, 0.78596,
    0.78482, 0.78377, 0.78280, 0.78192, 0.78111, 0.78038, 0.77974, 0.77918, 0.77870,
    0.77830, 0.77798, 0.77774, 0.77758, 0.77751, 0.77751, 0.77760, 0.77777, 0.77802,
    0.77835, 0.77876, 0.77926, 0.77983, 0.78049, 0.78123, 0.78204, 0.78294, 0.78393,
    0.78499, 0.78613, 0.78736, 0.78866, 0.79005, 0.79152, 0.79307, 0.79470, 0.79641,
    0.79821, 0.80008, 0.80204, 0.80408, 0.80620, 0.80840, 0.81068, 0.81304, 0.81549,
    0.81801, 0.82062, 0.82331, 0.82608, 0.82894, 0.83187, 0.83489, 0.83800, 0.84120,
    0.84448, 0.84786, 0.85135, 0.85494, 0.85867, 0.86255, 0.86663, 0.87095, 0.87561,
    0.88072, 0.88648, 0.89317, 0.90122, 0.91129, 0.92433, 0.94181, 0.96594, 1.00000,
];

#[rustfmt::skip]
pub const LONG_BC: [f64; PROFILE_BINS] = [
    0.82524, 0.82172, 0.81829, 0.81494, 0.81169, 0.80852, 0.80545, 0.80246, 0.79956,
    0.79675, 0.79403, 0.79139, 0.78885, 0.78640, 0.78403, 0.78175, 0.77957, 0.77747,
    0.77546, 0.77354, 0.77171, 0.76996, 0.76831, 0.76674, 0.76527, 0.76388, 0.76258,
    0.76137, 0.76025, 0.75922, 0.75828, 0.75743, 0.75666, 0.75599, 0.75540, 0.75490,
    0.75450, 0.75418, 0.75395, 0.75380, 0.75375, 0.75379, 0.75391, 0.75413, 0.75443,
    0.75482, 0.75530, 0.75587, 0.75653, 0.75728, 0.75812, 0.75904, 0.76006, 0.76116,
    0.76236, 0.76364, 0.76501, 0.76647, 0.76802, 0.76966, 0.77138, 0.77320, 0.77510,
    0.77710, 0.77918, 0.78135, 0.78361, 0.78596, 0.78840, 0.79093, 0.79355, 0.79626,
    0.79905, 0.80194, 0.80492, 0.80800, 0.81116, 0.81442, 0.81778, 0.82124, 0.82481,
    0.82849, 0.83229, 0.83624, 0.84034, 0.84463, 0.84914, 0.85393, 0.85908, 0.86470,
    0.87094, 0.87801, 0.88622, 0.89599, 0.90792, 0.92285, 0.94196, 0.96690, 1.00000,
];

#[rustfmt::skip]
pub const LONG_D: [f64; PROFILE_BINS] = [
    0.79710, 0.79330, 0.78960, 0.78600, 0.78249, 0.77908, 0.77577, 0.77255, 0.76943,
    0.76641, 0.76348, 0.76065, 0.75791, 0.75528, 0.75274, 0.75029, 0.74794, 0.74569,
    0.74354, 0.74148, 0.73952, 0.73765, 0.73588, 0.73421, 0.73264, 0.73116, 0.72977,
    0.72849, 0.72730, 0.72621, 0.72521, 0.72431, 0.72351, 0.72280, 0.72219, 0.72168,
    0.72126, 0.72094, 0.72072, 0.72059, 0.72056, 0.72063, 0.72079, 0.72105, 0.72141,
    0.72186, 0.72241, 0.72306, 0.72380, 0.72464, 0.72557, 0.72661, 0.72773, 0.72896,
    0.73028, 0.73170, 0.73322, 0.73483, 0.73654, 0.73834, 0.74024, 0.74224, 0.74434,
    0.74653, 0.74882, 0.75120, 0.75369, 0.75627, 0.75895, 0.76172, 0.76460, 0.76757,
    0.77065, 0.77383, 0.77711, 0.78049, 0.78399, 0.78760, 0.79132, 0.79517, 0.79916,
    0.80330, 0.80760, 0.81209, 0.81680, 0.82178, 0.82708, 0.83278, 0.83897, 0.84580,
    0.85345, 0.86215, 0.87224, 0.88415, 0.89847, 0.91598, 0.93773, 0.96511, 1.00000,
];

#[rustfmt::skip]
pub const EXT_A: [f64; PROFILE_BINS] = [
    0.86139, 0.85839, 0.85547, 0.85263, 0.84986, 0.84716, 0.84454, 0.84199, 0.83951,
    0.83711, 0.83479, 0.83254, 0.83036, 0.82826, 0.82623, 0.82427, 0.82239, 0.82059,
    0.81885, 0.81720, 0.81561, 0.81410, 0.81267, 0.81131, 0.81002, 0.80881, 0.80767,
    0.80661, 0.80562, 0.80470, 0.80386, 0.80309, 0.80240, 0.80178, 0.80124, 0.80077,
    0.80037, 0.80005, 0.79980, 0.79963, 0.79953, 0.79951, 0.79956, 0.79968, 0.79988,
    0.80015, 0.80050, 0.80092, 0.80141, 0.80198, 0.80262, 0.80334, 0.80413, 0.80500,
    0.80594, 0.80695, 0.80804, 0.80920, 0.81044, 0.81175, 0.81314, 0.81460, 0.81613,
    0.81774, 0.81942, 0.82118, 0.82301, 0.82492, 0.82690, 0.82895, 0.83108, 0.83328,
    0.83556, 0.83791, 0.84033, 0.84284, 0.84541, 0.84807, 0.85079, 0.85360, 0.85649,
    0.85946, 0.86252, 0.86567, 0.86892, 0.87229, 0.87581, 0.87950, 0.88341, 0.88762,
    0.89225, 0.89746, 0.90351, 0.91079, 0.91989, 0.93168, 0.94747, 0.96925, 1.00000,
];

#[rustfmt::skip]
pub const EXT_BC: [f64; PROFILE_BINS] = [
    0.83694, 0.83373, 0.83060, 0.82756, 0.82460, 0.82172, 0.81892, 0.81621, 0.81357,
    0.81102, 0.80855, 0.80616, 0.80385, 0.80163, 0.79949, 0.79743, 0.79545, 0.79355,
    0.79173, 0.79000, 0.78835, 0.78678, 0.78529, 0.78388, 0.78256, 0.78131, 0.78015,
    0.77907, 0.77808, 0.77716, 0.77633, 0.77557, 0.77490, 0.77432, 0.77381, 0.77339,
    0.77304, 0.77278, 0.77260, 0.77250, 0.77249, 0.77256, 0.77270, 0.77293, 0.77325,
    0.77364, 0.77411, 0.77467, 0.77531, 0.77603, 0.77683, 0.77772, 0.77869, 0.77973,
    0.78086, 0.78208, 0.78337, 0.78474, 0.78620, 0.78774, 0.78936, 0.79106, 0.79285,
    0.79472, 0.79666, 0.79870, 0.80081, 0.80300, 0.80528, 0.80764, 0.81008, 0.81260,
    0.81521, 0.81790, 0.82067, 0.82353, 0.82648, 0.82951, 0.83263, 0.83584, 0.83916,
    0.84258, 0.84611, 0.84977, 0.85357, 0.85754, 0.86172, 0.86615, 0.87092, 0.87610,
    0.88186, 0.88837, 0.89592, 0.90490, 0.91584, 0.92951, 0.94699, 0.96978, 1.00000,
];

#[rustfmt::skip]
pub const EXT_D: [f64; PROFILE_BINS] = [
    0.81202, 0.80815, 0.80438, 0.80070, 0.79713, 0.79365, 0.79027, 0.78698, 0.78379,
    0.78070, 0.77770, 0.77480, 0.77200, 0.76930, 0.76669, 0.76418, 0.76177, 0.75945,
    0.75723, 0.75510, 0.75308, 0.75115, 0.74931, 0.74758, 0.74594, 0.74440, 0.74295,
    0.74160, 0.74035, 0.73919, 0.73814, 0.73718, 0.73631, 0.73554, 0.73487, 0.73430,
    0.73382, 0.73344, 0.73316, 0.73297, 0.73288, 0.73289, 0.73299, 0.73319, 0.73349,
    0.73389, 0.73438, 0.73497, 0.73565, 0.73643, 0.73731, 0.73829, 0.73936, 0.74053,
    0.74180, 0.74316, 0.74462, 0.74618, 0.74783, 0.74958, 0.75143, 0.75338, 0.75542,
    0.75756, 0.75979, 0.76213, 0.76456, 0.76709, 0.76971, 0.77244, 0.77526, 0.77819,
    0.78121, 0.78434, 0.78756, 0.79090, 0.79434, 0.79789, 0.80156, 0.80536, 0.80928,
    0.81335, 0.81759, 0.82200, 0.82663, 0.83151, 0.83669, 0.84224, 0.84826, 0.85487,
    0.86224, 0.87060, 0.88023, 0.89155, 0.90509, 0.92157, 0.94195, 0.96752, 1.00000,
];
