//! Curve table literals.
//!
//! The real-valued curves are non-decreasing, so lower-bound search in
//! [`search`](super::search) applies to them. The index tables
//! (`OSC_MIX_A`, `OSC_MIX_B`, `CHORD_INDEX`, `LFO_WAVEFORM_CODES`) are not
//! sorted. Runs of equal values are deliberate: they widen a single setting
//! (a chord, a tempo division, an LFO shape) across several raw positions
//! of a physical control.

/// Linear 0..1 curve. Also the level curve indexed by `OSC_MIX_A`/`OSC_MIX_B`.
pub static LINEAR: [f32; 128] = [
    0.0, 0.008, 0.016, 0.024, 0.031, 0.039, 0.047, 0.055,
    0.063, 0.071, 0.079, 0.087, 0.094, 0.102, 0.11, 0.118,
    0.126, 0.134, 0.142, 0.15, 0.157, 0.165, 0.173, 0.181,
    0.189, 0.197, 0.205, 0.213, 0.22, 0.228, 0.236, 0.244,
    0.252, 0.26, 0.268, 0.276, 0.283, 0.291, 0.299, 0.307,
    0.315, 0.323, 0.331, 0.339, 0.346, 0.354, 0.362, 0.37,
    0.378, 0.386, 0.394, 0.402, 0.409, 0.417, 0.425, 0.433,
    0.441, 0.449, 0.457, 0.465, 0.472, 0.48, 0.488, 0.496,
    0.504, 0.512, 0.52, 0.528, 0.535, 0.543, 0.551, 0.559,
    0.567, 0.575, 0.583, 0.591, 0.598, 0.606, 0.614, 0.622,
    0.63, 0.638, 0.646, 0.654, 0.661, 0.669, 0.677, 0.685,
    0.693, 0.701, 0.709, 0.717, 0.724, 0.732, 0.74, 0.748,
    0.756, 0.764, 0.772, 0.78, 0.787, 0.795, 0.803, 0.811,
    0.819, 0.827, 0.835, 0.843, 0.85, 0.858, 0.866, 0.874,
    0.882, 0.89, 0.898, 0.906, 0.913, 0.921, 0.929, 0.937,
    0.945, 0.953, 0.961, 0.969, 0.976, 0.984, 0.992, 1.0,
];

/// Linear -1..1 curve with a two-step zero detent at indices 63 and 64.
pub static LINEAR_CENTRE_ZERO: [f32; 128] = [
    -1.0, -0.984, -0.968, -0.952, -0.937, -0.921, -0.905, -0.889,
    -0.873, -0.857, -0.841, -0.825, -0.81, -0.794, -0.778, -0.762,
    -0.746, -0.73, -0.714, -0.698, -0.683, -0.667, -0.651, -0.635,
    -0.619, -0.603, -0.587, -0.571, -0.556, -0.54, -0.524, -0.508,
    -0.492, -0.476, -0.46, -0.444, -0.429, -0.413, -0.397, -0.381,
    -0.365, -0.349, -0.333, -0.317, -0.302, -0.286, -0.27, -0.254,
    -0.238, -0.222, -0.206, -0.19, -0.175, -0.159, -0.143, -0.127,
    -0.111, -0.095, -0.079, -0.063, -0.048, -0.032, -0.016, 0.0,
    0.0, 0.016, 0.032, 0.048, 0.063, 0.079, 0.095, 0.111,
    0.127, 0.143, 0.159, 0.175, 0.19, 0.206, 0.222, 0.238,
    0.254, 0.27, 0.286, 0.302, 0.317, 0.333, 0.349, 0.365,
    0.381, 0.397, 0.413, 0.429, 0.444, 0.46, 0.476, 0.492,
    0.508, 0.524, 0.54, 0.556, 0.571, 0.587, 0.603, 0.619,
    0.635, 0.651, 0.667, 0.683, 0.698, 0.714, 0.73, 0.746,
    0.762, 0.778, 0.794, 0.81, 0.825, 0.841, 0.857, 0.873,
    0.889, 0.905, 0.921, 0.937, 0.952, 0.968, 0.984, 1.0,
];

/// Exponential 0..1 curve used for amounts, rates and glide.
pub static POWER: [f32; 128] = [
    0.0, 0.00027, 0.00056, 0.00085, 0.00116, 0.00148,
    0.00181, 0.00215, 0.00251, 0.00288, 0.00327, 0.00368,
    0.0041, 0.00453, 0.00499, 0.00546, 0.00595, 0.00646,
    0.007, 0.00755, 0.00812, 0.00872, 0.00935, 0.00999,
    0.01067, 0.01137, 0.0121, 0.01286, 0.01364, 0.01446,
    0.01532, 0.0162, 0.01713, 0.01809, 0.01909, 0.02013,
    0.02121, 0.02233, 0.0235, 0.02472, 0.02598, 0.0273,
    0.02866, 0.03009, 0.03157, 0.03311, 0.03471, 0.03638,
    0.03811, 0.03991, 0.04179, 0.04374, 0.04577, 0.04788,
    0.05007, 0.05235, 0.05473, 0.0572, 0.05977, 0.06244,
    0.06522, 0.06811, 0.07112, 0.07425, 0.0775, 0.08089,
    0.08441, 0.08807, 0.09188, 0.09584, 0.09996, 0.10425,
    0.1087, 0.11334, 0.11816, 0.12318, 0.1284, 0.13383,
    0.13948, 0.14535, 0.15146, 0.15781, 0.16442, 0.1713,
    0.17845, 0.18589, 0.19362, 0.20167, 0.21004, 0.21875,
    0.2278, 0.23722, 0.24702, 0.25721, 0.26781, 0.27884,
    0.29031, 0.30224, 0.31465, 0.32755, 0.34098, 0.35494,
    0.36947, 0.38458, 0.40029, 0.41664, 0.43364, 0.45133,
    0.46972, 0.48886, 0.50876, 0.52946, 0.551, 0.57339,
    0.59669, 0.62092, 0.64613, 0.67235, 0.69962, 0.72798,
    0.75749, 0.78818, 0.8201, 0.85331, 0.88784, 0.92377,
    0.96113, 1.0,
];

/// Envelope stage times in milliseconds.
pub static ENV_TIMES: [f32; 128] = [
    1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0,
    9.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0,
    17.0, 18.0, 19.0, 20.0, 21.0, 22.0, 23.0, 24.0,
    25.0, 26.0, 27.0, 28.0, 29.0, 30.0, 31.0, 32.0,
    33.0, 34.0, 35.0, 36.0, 37.0, 38.0, 39.0, 40.0,
    41.0, 42.0, 43.0, 44.0, 45.0, 46.0, 47.0, 48.0,
    49.0, 50.0, 51.0, 52.0, 53.0, 54.0, 55.0, 58.0,
    63.0, 68.0, 73.0, 79.0, 85.0, 91.0, 98.0, 106.0,
    114.0, 122.0, 132.0, 142.0, 153.0, 165.0, 177.0, 191.0,
    205.0, 221.0, 238.0, 256.0, 276.0, 297.0, 320.0, 345.0,
    371.0, 400.0, 430.0, 463.0, 499.0, 537.0, 578.0, 623.0,
    671.0, 722.0, 778.0, 837.0, 902.0, 971.0, 1045.0, 1126.0,
    1212.0, 1305.0, 1405.0, 1513.0, 1629.0, 1754.0, 1889.0, 2034.0,
    2190.0, 2358.0, 2539.0, 2734.0, 2944.0, 3170.0, 3413.0, 3675.0,
    3957.0, 4261.0, 4588.0, 4940.0, 5319.0, 5728.0, 6167.0, 6641.0,
    7151.0, 7700.0, 8291.0, 8927.0, 9612.0, 10350.0, 11145.0, 12000.0,
];

/// Filter cutoff in Hz. Twice the resolution of a MIDI value: CC `v` selects index `2 * v`.
pub static FILTER_FREQS_256: [f32; 256] = [
    20.0, 21.0, 22.0, 23.0, 24.0, 25.0, 26.0, 27.0,
    28.0, 29.0, 30.0, 31.0, 32.0, 33.0, 34.0, 35.0,
    36.0, 37.0, 38.0, 39.0, 40.0, 41.0, 42.0, 43.0,
    44.0, 45.0, 46.0, 47.0, 48.0, 49.0, 50.0, 51.0,
    52.0, 53.0, 54.0, 55.0, 56.0, 57.0, 58.0, 59.0,
    60.0, 61.0, 62.0, 63.0, 64.0, 65.0, 66.0, 67.0,
    68.0, 69.0, 70.0, 72.0, 74.0, 76.0, 78.0, 79.0,
    81.0, 84.0, 86.0, 88.0, 90.0, 92.0, 95.0, 97.0,
    100.0, 102.0, 105.0, 107.0, 110.0, 113.0, 116.0, 119.0,
    122.0, 125.0, 128.0, 131.0, 135.0, 138.0, 142.0, 145.0,
    149.0, 153.0, 156.0, 160.0, 165.0, 169.0, 173.0, 177.0,
    182.0, 186.0, 191.0, 196.0, 201.0, 206.0, 211.0, 217.0,
    222.0, 228.0, 234.0, 240.0, 246.0, 252.0, 258.0, 265.0,
    272.0, 279.0, 286.0, 293.0, 300.0, 308.0, 316.0, 324.0,
    332.0, 341.0, 349.0, 358.0, 367.0, 376.0, 386.0, 396.0,
    406.0, 416.0, 427.0, 438.0, 449.0, 460.0, 472.0, 484.0,
    496.0, 509.0, 522.0, 535.0, 548.0, 562.0, 577.0, 591.0,
    606.0, 622.0, 638.0, 654.0, 670.0, 687.0, 705.0, 723.0,
    741.0, 760.0, 779.0, 799.0, 819.0, 840.0, 861.0, 883.0,
    906.0, 929.0, 952.0, 977.0, 1001.0, 1027.0, 1053.0, 1080.0,
    1107.0, 1135.0, 1164.0, 1194.0, 1224.0, 1255.0, 1287.0, 1320.0,
    1353.0, 1388.0, 1423.0, 1459.0, 1496.0, 1534.0, 1573.0, 1613.0,
    1654.0, 1696.0, 1739.0, 1783.0, 1828.0, 1875.0, 1923.0, 1971.0,
    2021.0, 2073.0, 2125.0, 2179.0, 2235.0, 2292.0, 2350.0, 2409.0,
    2471.0, 2533.0, 2598.0, 2664.0, 2731.0, 2801.0, 2872.0, 2945.0,
    3020.0, 3096.0, 3175.0, 3256.0, 3338.0, 3423.0, 3510.0, 3599.0,
    3691.0, 3785.0, 3881.0, 3979.0, 4080.0, 4184.0, 4290.0, 4399.0,
    4511.0, 4626.0, 4743.0, 4864.0, 4987.0, 5114.0, 5244.0, 5377.0,
    5514.0, 5654.0, 5797.0, 5945.0, 6096.0, 6251.0, 6409.0, 6572.0,
    6739.0, 6910.0, 7086.0, 7266.0, 7450.0, 7640.0, 7834.0, 8033.0,
    8237.0, 8446.0, 8661.0, 8881.0, 9106.0, 9338.0, 9575.0, 9818.0,
    10067.0, 10323.0, 10585.0, 10854.0, 11130.0, 11413.0, 11703.0, 12000.0,
];

/// Filter resonance (Q), 0.71..15.
pub static FILTER_RESONANCE: [f32; 128] = [
    0.71, 0.714, 0.718, 0.722, 0.727, 0.731, 0.736, 0.741,
    0.746, 0.751, 0.757, 0.763, 0.769, 0.775, 0.781, 0.788,
    0.795, 0.802, 0.81, 0.818, 0.826, 0.835, 0.844, 0.853,
    0.862, 0.872, 0.883, 0.894, 0.905, 0.917, 0.929, 0.941,
    0.955, 0.969, 0.983, 0.998, 1.013, 1.029, 1.046, 1.063,
    1.081, 1.1, 1.12, 1.14, 1.161, 1.183, 1.206, 1.23,
    1.255, 1.28, 1.307, 1.335, 1.364, 1.394, 1.426, 1.458,
    1.492, 1.527, 1.564, 1.602, 1.642, 1.683, 1.726, 1.771,
    1.817, 1.866, 1.916, 1.969, 2.023, 2.08, 2.138, 2.2,
    2.263, 2.33, 2.399, 2.47, 2.545, 2.622, 2.703, 2.787,
    2.874, 2.965, 3.06, 3.158, 3.26, 3.366, 3.477, 3.592,
    3.711, 3.836, 3.965, 4.1, 4.24, 4.386, 4.537, 4.695,
    4.859, 5.029, 5.206, 5.391, 5.583, 5.782, 5.99, 6.206,
    6.43, 6.664, 6.907, 7.16, 7.422, 7.696, 7.98, 8.276,
    8.584, 8.904, 9.237, 9.583, 9.943, 10.318, 10.708, 11.113,
    11.535, 11.973, 12.429, 12.904, 13.397, 13.911, 14.445, 15.0,
];

/// Filter mixer: 0 is low pass, 1 is high pass, in between is a notch blend.
/// The top run holds [`BANDPASS`].
pub static FILTER_MIXER: [f32; 128] = [
    0.0, 0.008, 0.017, 0.025, 0.034, 0.042, 0.05, 0.059,
    0.067, 0.076, 0.084, 0.092, 0.101, 0.109, 0.118, 0.126,
    0.134, 0.143, 0.151, 0.16, 0.168, 0.176, 0.185, 0.193,
    0.202, 0.21, 0.218, 0.227, 0.235, 0.244, 0.252, 0.261,
    0.269, 0.277, 0.286, 0.294, 0.303, 0.311, 0.319, 0.328,
    0.336, 0.345, 0.353, 0.361, 0.37, 0.378, 0.387, 0.395,
    0.403, 0.412, 0.42, 0.429, 0.437, 0.445, 0.454, 0.462,
    0.471, 0.479, 0.487, 0.496, 0.504, 0.513, 0.521, 0.529,
    0.538, 0.546, 0.555, 0.563, 0.571, 0.58, 0.588, 0.597,
    0.605, 0.613, 0.622, 0.63, 0.639, 0.647, 0.655, 0.664,
    0.672, 0.681, 0.689, 0.697, 0.706, 0.714, 0.723, 0.731,
    0.739, 0.748, 0.756, 0.765, 0.773, 0.782, 0.79, 0.798,
    0.807, 0.815, 0.824, 0.832, 0.84, 0.849, 0.857, 0.866,
    0.874, 0.882, 0.891, 0.899, 0.908, 0.916, 0.924, 0.933,
    0.941, 0.95, 0.958, 0.966, 0.975, 0.983, 0.992, 1.0,
    2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0,
];

/// Key tracking amount in eighths, one run per step.
pub static KEY_TRACKING: [f32; 128] = [
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.125,
    0.125, 0.125, 0.125, 0.125, 0.125, 0.125, 0.125, 0.125,
    0.125, 0.125, 0.125, 0.125, 0.125, 0.25, 0.25, 0.25,
    0.25, 0.25, 0.25, 0.25, 0.25, 0.25, 0.25, 0.25,
    0.25, 0.25, 0.25, 0.375, 0.375, 0.375, 0.375, 0.375,
    0.375, 0.375, 0.375, 0.375, 0.375, 0.375, 0.375, 0.375,
    0.375, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5,
    0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5,
    0.625, 0.625, 0.625, 0.625, 0.625, 0.625, 0.625, 0.625,
    0.625, 0.625, 0.625, 0.625, 0.625, 0.625, 0.75, 0.75,
    0.75, 0.75, 0.75, 0.75, 0.75, 0.75, 0.75, 0.75,
    0.75, 0.75, 0.75, 0.75, 0.875, 0.875, 0.875, 0.875,
    0.875, 0.875, 0.875, 0.875, 0.875, 0.875, 0.875, 0.875,
    0.875, 0.875, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0,
    1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0,
];

/// Oscillator semitone offsets, -24..+24, in runs of two or three indices.
pub static PITCH: [i8; 128] = [
    -24, -24, -24, -23, -23, -22, -22, -22, -21, -21, -21, -20, -20, -19, -19, -19,
    -18, -18, -18, -17, -17, -16, -16, -16, -15, -15, -14, -14, -14, -13, -13, -13,
    -12, -12, -11, -11, -11, -10, -10, -10, -9, -9, -8, -8, -8, -7, -7, -6,
    -6, -6, -5, -5, -5, -4, -4, -3, -3, -3, -2, -2, -2, -1, -1, 0,
    0, 0, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 5, 5, 5, 6,
    6, 6, 7, 7, 8, 8, 8, 9, 9, 10, 10, 10, 11, 11, 11, 12,
    12, 13, 13, 13, 14, 14, 14, 15, 15, 16, 16, 16, 17, 17, 18, 18,
    18, 19, 19, 19, 20, 20, 21, 21, 21, 22, 22, 22, 23, 23, 24, 24,
];

/// PWM LFO rate in Hz. The bottom runs hold the [`PWM_RATE_PW_MODE`] and
/// [`PWM_RATE_FILTER_ENV`] markers.
pub static PWM_RATE: [f32; 128] = [
    -10.0, -10.0, -5.0, -5.0, 0.05, 0.052, 0.054, 0.057,
    0.059, 0.062, 0.065, 0.068, 0.071, 0.074, 0.077, 0.08,
    0.084, 0.088, 0.091, 0.095, 0.1, 0.104, 0.109, 0.113,
    0.118, 0.124, 0.129, 0.135, 0.141, 0.147, 0.153, 0.16,
    0.167, 0.174, 0.182, 0.19, 0.198, 0.207, 0.216, 0.226,
    0.236, 0.246, 0.257, 0.268, 0.28, 0.292, 0.305, 0.319,
    0.333, 0.347, 0.363, 0.379, 0.395, 0.413, 0.431, 0.45,
    0.47, 0.49, 0.512, 0.534, 0.558, 0.583, 0.608, 0.635,
    0.663, 0.692, 0.723, 0.754, 0.788, 0.822, 0.858, 0.896,
    0.936, 0.977, 1.02, 1.065, 1.112, 1.16, 1.212, 1.265,
    1.321, 1.379, 1.439, 1.503, 1.569, 1.638, 1.71, 1.785,
    1.864, 1.946, 2.032, 2.121, 2.214, 2.312, 2.414, 2.52,
    2.631, 2.746, 2.867, 2.994, 3.125, 3.263, 3.407, 3.556,
    3.713, 3.876, 4.047, 4.225, 4.411, 4.605, 4.808, 5.02,
    5.241, 5.471, 5.712, 5.964, 6.226, 6.5, 6.786, 7.085,
    7.397, 7.722, 8.062, 8.417, 8.788, 9.175, 9.578, 10.0,
];

/// Ensemble effect LFO rate in Hz.
pub static ENSEMBLE_LFO: [f32; 128] = [
    0.01, 0.0105, 0.011, 0.0116, 0.0122, 0.0128,
    0.0134, 0.0141, 0.0148, 0.0155, 0.0163, 0.0171,
    0.018, 0.0189, 0.0198, 0.0208, 0.0219, 0.023,
    0.0241, 0.0253, 0.0266, 0.0279, 0.0293, 0.0308,
    0.0324, 0.034, 0.0357, 0.0375, 0.0394, 0.0413,
    0.0434, 0.0456, 0.0479, 0.0503, 0.0528, 0.0554,
    0.0582, 0.0611, 0.0642, 0.0674, 0.0708, 0.0744,
    0.0781, 0.082, 0.0861, 0.0904, 0.095, 0.0997,
    0.1047, 0.11, 0.1155, 0.1213, 0.1274, 0.1338,
    0.1405, 0.1475, 0.1549, 0.1627, 0.1708, 0.1794,
    0.1884, 0.1979, 0.2078, 0.2182, 0.2291, 0.2406,
    0.2527, 0.2654, 0.2787, 0.2927, 0.3073, 0.3228,
    0.3389, 0.3559, 0.3738, 0.3925, 0.4122, 0.4329,
    0.4546, 0.4774, 0.5013, 0.5265, 0.5529, 0.5806,
    0.6097, 0.6403, 0.6724, 0.7062, 0.7416, 0.7788,
    0.8178, 0.8588, 0.9019, 0.9471, 0.9946, 1.0445,
    1.0969, 1.1519, 1.2097, 1.2703, 1.3341, 1.401,
    1.4712, 1.545, 1.6225, 1.7039, 1.7893, 1.879,
    1.9733, 2.0722, 2.1762, 2.2853, 2.3999, 2.5203,
    2.6467, 2.7794, 2.9188, 3.0652, 3.2189, 3.3803,
    3.5498, 3.7279, 3.9148, 4.1111, 4.3173, 4.5338,
    4.7612, 5.0,
];

/// LFO rate as a multiple of the MIDI clock beat frequency, in runs per division.
pub static LFO_TEMPO: [f32; 128] = [
    0.0625, 0.0625, 0.0625, 0.0625, 0.0625, 0.0625,
    0.0625, 0.0625, 0.125, 0.125, 0.125, 0.125,
    0.125, 0.125, 0.125, 0.25, 0.25, 0.25,
    0.25, 0.25, 0.25, 0.25, 0.3333333333333333, 0.3333333333333333,
    0.3333333333333333, 0.3333333333333333, 0.3333333333333333, 0.3333333333333333, 0.3333333333333333, 0.5,
    0.5, 0.5, 0.5, 0.5, 0.5, 0.5,
    0.6666666666666666, 0.6666666666666666, 0.6666666666666666, 0.6666666666666666, 0.6666666666666666, 0.6666666666666666,
    0.6666666666666666, 0.75, 0.75, 0.75, 0.75, 0.75,
    0.75, 0.75, 1.0, 1.0, 1.0, 1.0,
    1.0, 1.0, 1.0, 1.3333333333333333, 1.3333333333333333, 1.3333333333333333,
    1.3333333333333333, 1.3333333333333333, 1.3333333333333333, 1.3333333333333333, 1.5, 1.5,
    1.5, 1.5, 1.5, 1.5, 1.5, 1.5,
    2.0, 2.0, 2.0, 2.0, 2.0, 2.0,
    2.0, 2.6666666666666665, 2.6666666666666665, 2.6666666666666665, 2.6666666666666665, 2.6666666666666665,
    2.6666666666666665, 2.6666666666666665, 3.0, 3.0, 3.0, 3.0,
    3.0, 3.0, 3.0, 4.0, 4.0, 4.0,
    4.0, 4.0, 4.0, 4.0, 6.0, 6.0,
    6.0, 6.0, 6.0, 6.0, 6.0, 8.0,
    8.0, 8.0, 8.0, 8.0, 8.0, 8.0,
    12.0, 12.0, 12.0, 12.0, 12.0, 12.0,
    12.0, 16.0, 16.0, 16.0, 16.0, 16.0,
    16.0, 16.0,
];

/// Display label for each [`LFO_TEMPO`] entry.
pub static LFO_TEMPO_LABELS: [&str; 128] = [
    "4 Bars", "4 Bars", "4 Bars", "4 Bars", "4 Bars", "4 Bars", "4 Bars", "4 Bars",
    "2 Bars", "2 Bars", "2 Bars", "2 Bars", "2 Bars", "2 Bars", "2 Bars", "1 Bar",
    "1 Bar", "1 Bar", "1 Bar", "1 Bar", "1 Bar", "1 Bar", "1/2.", "1/2.",
    "1/2.", "1/2.", "1/2.", "1/2.", "1/2.", "1/2", "1/2", "1/2",
    "1/2", "1/2", "1/2", "1/2", "1/4.", "1/4.", "1/4.", "1/4.",
    "1/4.", "1/4.", "1/4.", "1/2T", "1/2T", "1/2T", "1/2T", "1/2T",
    "1/2T", "1/2T", "1/4", "1/4", "1/4", "1/4", "1/4", "1/4",
    "1/4", "1/8.", "1/8.", "1/8.", "1/8.", "1/8.", "1/8.", "1/8.",
    "1/4T", "1/4T", "1/4T", "1/4T", "1/4T", "1/4T", "1/4T", "1/4T",
    "1/8", "1/8", "1/8", "1/8", "1/8", "1/8", "1/8", "1/16.",
    "1/16.", "1/16.", "1/16.", "1/16.", "1/16.", "1/16.", "1/8T", "1/8T",
    "1/8T", "1/8T", "1/8T", "1/8T", "1/8T", "1/16", "1/16", "1/16",
    "1/16", "1/16", "1/16", "1/16", "1/16T", "1/16T", "1/16T", "1/16T",
    "1/16T", "1/16T", "1/16T", "1/32", "1/32", "1/32", "1/32", "1/32",
    "1/32", "1/32", "1/32T", "1/32T", "1/32T", "1/32T", "1/32T", "1/32T",
    "1/32T", "1/64", "1/64", "1/64", "1/64", "1/64", "1/64", "1/64",
];

/// Oscillator 1 level as an index into [`LINEAR`], per oscillator mix index.
pub static OSC_MIX_A: [u8; 128] = [
    127, 127, 127, 127, 127, 127, 127, 127, 127, 127, 127, 127, 127, 127, 127, 127,
    127, 127, 127, 127, 127, 127, 127, 127, 127, 127, 127, 127, 127, 127, 127, 127,
    127, 127, 127, 127, 127, 127, 127, 127, 127, 127, 127, 127, 127, 127, 127, 127,
    127, 127, 127, 127, 127, 127, 127, 127, 127, 127, 127, 127, 127, 127, 127, 127,
    126, 125, 123, 120, 118, 116, 114, 112, 110, 108, 106, 104, 102, 100, 98, 96,
    94, 92, 90, 88, 86, 84, 82, 80, 78, 76, 74, 72, 70, 68, 66, 64,
    62, 60, 58, 56, 54, 52, 50, 48, 46, 44, 42, 40, 38, 36, 34, 32,
    30, 28, 26, 24, 22, 20, 18, 16, 14, 12, 10, 8, 6, 4, 2, 0,
];

/// Oscillator 2 level as an index into [`LINEAR`], per oscillator mix index.
pub static OSC_MIX_B: [u8; 128] = [
    0, 2, 4, 6, 8, 10, 12, 14, 16, 18, 20, 22, 24, 26, 28, 30,
    32, 34, 36, 38, 40, 42, 44, 46, 48, 50, 52, 54, 56, 58, 60, 62,
    64, 66, 68, 70, 72, 74, 76, 78, 80, 82, 84, 86, 88, 90, 92, 94,
    96, 98, 100, 102, 104, 106, 108, 110, 112, 114, 116, 118, 120, 123, 125, 126,
    127, 127, 127, 127, 127, 127, 127, 127, 127, 127, 127, 127, 127, 127, 127, 127,
    127, 127, 127, 127, 127, 127, 127, 127, 127, 127, 127, 127, 127, 127, 127, 127,
    127, 127, 127, 127, 127, 127, 127, 127, 127, 127, 127, 127, 127, 127, 127, 127,
    127, 127, 127, 127, 127, 127, 127, 127, 127, 127, 127, 127, 127, 127, 127, 127,
];

/// Chord selected by each detune index, in runs of seven.
pub static CHORD_INDEX: [u8; 128] = [
    0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 2, 2,
    2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 3, 3, 4, 4, 4, 4,
    4, 4, 4, 5, 5, 5, 5, 5, 5, 5, 6, 6, 6, 6, 6, 6,
    6, 7, 7, 7, 7, 7, 7, 7, 8, 8, 8, 8, 8, 8, 8, 9,
    9, 9, 9, 9, 9, 9, 10, 10, 10, 10, 10, 10, 10, 11, 11, 11,
    11, 11, 11, 11, 12, 12, 12, 12, 12, 12, 12, 13, 13, 13, 13, 13,
    13, 13, 14, 14, 14, 14, 14, 14, 14, 15, 15, 15, 15, 15, 15, 15,
    16, 16, 16, 16, 16, 16, 16, 17, 17, 17, 17, 17, 17, 17, 18, 18,
];

/// LFO waveform code selected by each raw index (see [`Waveform`](crate::engine::Waveform)).
pub static LFO_WAVEFORM_CODES: [u8; 128] = [
    0, 0, 0, 0, 0, 0, 0, 0, 3, 3, 3, 3, 3, 3, 3, 3,
    3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 6, 6,
    6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6,
    6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2,
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 7,
    7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7,
];
