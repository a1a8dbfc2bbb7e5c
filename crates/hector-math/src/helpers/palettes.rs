//! Lookup tables for the perceptual gradients.

use super::coloring::Rgb;

/// Turbo colormap, an improved rainbow with monotone lightness ramps.
#[rustfmt::skip]
pub(super) static TURBO: [Rgb; 256] = [
    Rgb::new(48, 18, 59), Rgb::new(50, 21, 67), Rgb::new(51, 24, 74), Rgb::new(52, 27, 81),
    Rgb::new(53, 30, 88), Rgb::new(54, 33, 95), Rgb::new(55, 36, 102), Rgb::new(56, 39, 109),
    Rgb::new(57, 42, 115), Rgb::new(58, 45, 121), Rgb::new(59, 47, 128), Rgb::new(60, 50, 134),
    Rgb::new(61, 53, 139), Rgb::new(62, 56, 145), Rgb::new(63, 59, 151), Rgb::new(63, 62, 156),
    Rgb::new(64, 64, 162), Rgb::new(65, 67, 167), Rgb::new(65, 70, 172), Rgb::new(66, 73, 177),
    Rgb::new(66, 75, 181), Rgb::new(67, 78, 186), Rgb::new(68, 81, 191), Rgb::new(68, 84, 195),
    Rgb::new(68, 86, 199), Rgb::new(69, 89, 203), Rgb::new(69, 92, 207), Rgb::new(69, 94, 211),
    Rgb::new(70, 97, 214), Rgb::new(70, 100, 218), Rgb::new(70, 102, 221), Rgb::new(70, 105, 224),
    Rgb::new(70, 107, 227), Rgb::new(71, 110, 230), Rgb::new(71, 113, 233), Rgb::new(71, 115, 235),
    Rgb::new(71, 118, 238), Rgb::new(71, 120, 240), Rgb::new(71, 123, 242), Rgb::new(70, 125, 244),
    Rgb::new(70, 128, 246), Rgb::new(70, 130, 248), Rgb::new(70, 133, 250), Rgb::new(70, 135, 251),
    Rgb::new(69, 138, 252), Rgb::new(69, 140, 253), Rgb::new(68, 143, 254), Rgb::new(67, 145, 254),
    Rgb::new(66, 148, 255), Rgb::new(65, 150, 255), Rgb::new(64, 153, 255), Rgb::new(62, 155, 254),
    Rgb::new(61, 158, 254), Rgb::new(59, 160, 253), Rgb::new(58, 163, 252), Rgb::new(56, 165, 251),
    Rgb::new(55, 168, 250), Rgb::new(53, 171, 248), Rgb::new(51, 173, 247), Rgb::new(49, 175, 245),
    Rgb::new(47, 178, 244), Rgb::new(46, 180, 242), Rgb::new(44, 183, 240), Rgb::new(42, 185, 238),
    Rgb::new(40, 188, 235), Rgb::new(39, 190, 233), Rgb::new(37, 192, 231), Rgb::new(35, 195, 228),
    Rgb::new(34, 197, 226), Rgb::new(32, 199, 223), Rgb::new(31, 201, 221), Rgb::new(30, 203, 218),
    Rgb::new(28, 205, 216), Rgb::new(27, 208, 213), Rgb::new(26, 210, 210), Rgb::new(26, 212, 208),
    Rgb::new(25, 213, 205), Rgb::new(24, 215, 202), Rgb::new(24, 217, 200), Rgb::new(24, 219, 197),
    Rgb::new(24, 221, 194), Rgb::new(24, 222, 192), Rgb::new(24, 224, 189), Rgb::new(25, 226, 187),
    Rgb::new(25, 227, 185), Rgb::new(26, 228, 182), Rgb::new(28, 230, 180), Rgb::new(29, 231, 178),
    Rgb::new(31, 233, 175), Rgb::new(32, 234, 172), Rgb::new(34, 235, 170), Rgb::new(37, 236, 167),
    Rgb::new(39, 238, 164), Rgb::new(42, 239, 161), Rgb::new(44, 240, 158), Rgb::new(47, 241, 155),
    Rgb::new(50, 242, 152), Rgb::new(53, 243, 148), Rgb::new(56, 244, 145), Rgb::new(60, 245, 142),
    Rgb::new(63, 246, 138), Rgb::new(67, 247, 135), Rgb::new(70, 248, 132), Rgb::new(74, 248, 128),
    Rgb::new(78, 249, 125), Rgb::new(82, 250, 122), Rgb::new(85, 250, 118), Rgb::new(89, 251, 115),
    Rgb::new(93, 252, 111), Rgb::new(97, 252, 108), Rgb::new(101, 253, 105), Rgb::new(105, 253, 102),
    Rgb::new(109, 254, 98), Rgb::new(113, 254, 95), Rgb::new(117, 254, 92), Rgb::new(121, 254, 89),
    Rgb::new(125, 255, 86), Rgb::new(128, 255, 83), Rgb::new(132, 255, 81), Rgb::new(136, 255, 78),
    Rgb::new(139, 255, 75), Rgb::new(143, 255, 73), Rgb::new(146, 255, 71), Rgb::new(150, 254, 68),
    Rgb::new(153, 254, 66), Rgb::new(156, 254, 64), Rgb::new(159, 253, 63), Rgb::new(161, 253, 61),
    Rgb::new(164, 252, 60), Rgb::new(167, 252, 58), Rgb::new(169, 251, 57), Rgb::new(172, 251, 56),
    Rgb::new(175, 250, 55), Rgb::new(177, 249, 54), Rgb::new(180, 248, 54), Rgb::new(183, 247, 53),
    Rgb::new(185, 246, 53), Rgb::new(188, 245, 52), Rgb::new(190, 244, 52), Rgb::new(193, 243, 52),
    Rgb::new(195, 241, 52), Rgb::new(198, 240, 52), Rgb::new(200, 239, 52), Rgb::new(203, 237, 52),
    Rgb::new(205, 236, 52), Rgb::new(208, 234, 52), Rgb::new(210, 233, 53), Rgb::new(212, 231, 53),
    Rgb::new(215, 229, 53), Rgb::new(217, 228, 54), Rgb::new(219, 226, 54), Rgb::new(221, 224, 55),
    Rgb::new(223, 223, 55), Rgb::new(225, 221, 55), Rgb::new(227, 219, 56), Rgb::new(229, 217, 56),
    Rgb::new(231, 215, 57), Rgb::new(233, 213, 57), Rgb::new(235, 211, 57), Rgb::new(236, 209, 58),
    Rgb::new(238, 207, 58), Rgb::new(239, 205, 58), Rgb::new(241, 203, 58), Rgb::new(242, 201, 58),
    Rgb::new(244, 199, 58), Rgb::new(245, 197, 58), Rgb::new(246, 195, 58), Rgb::new(247, 193, 58),
    Rgb::new(248, 190, 57), Rgb::new(249, 188, 57), Rgb::new(250, 186, 57), Rgb::new(251, 184, 56),
    Rgb::new(251, 182, 55), Rgb::new(252, 179, 54), Rgb::new(252, 177, 54), Rgb::new(253, 174, 53),
    Rgb::new(253, 172, 52), Rgb::new(254, 169, 51), Rgb::new(254, 167, 50), Rgb::new(254, 164, 49),
    Rgb::new(254, 161, 48), Rgb::new(254, 158, 47), Rgb::new(254, 155, 45), Rgb::new(254, 153, 44),
    Rgb::new(254, 150, 43), Rgb::new(254, 147, 42), Rgb::new(254, 144, 41), Rgb::new(253, 141, 39),
    Rgb::new(253, 138, 38), Rgb::new(252, 135, 37), Rgb::new(252, 132, 35), Rgb::new(251, 129, 34),
    Rgb::new(251, 126, 33), Rgb::new(250, 123, 31), Rgb::new(249, 120, 30), Rgb::new(249, 117, 29),
    Rgb::new(248, 114, 28), Rgb::new(247, 111, 26), Rgb::new(246, 108, 25), Rgb::new(245, 105, 24),
    Rgb::new(244, 102, 23), Rgb::new(243, 99, 21), Rgb::new(242, 96, 20), Rgb::new(241, 93, 19),
    Rgb::new(240, 91, 18), Rgb::new(239, 88, 17), Rgb::new(237, 85, 16), Rgb::new(236, 83, 15),
    Rgb::new(235, 80, 14), Rgb::new(234, 78, 13), Rgb::new(232, 75, 12), Rgb::new(231, 73, 12),
    Rgb::new(229, 71, 11), Rgb::new(228, 69, 10), Rgb::new(226, 67, 10), Rgb::new(225, 65, 9),
    Rgb::new(223, 63, 8), Rgb::new(221, 61, 8), Rgb::new(220, 59, 7), Rgb::new(218, 57, 7),
    Rgb::new(216, 55, 6), Rgb::new(214, 53, 6), Rgb::new(212, 51, 5), Rgb::new(210, 49, 5),
    Rgb::new(208, 47, 5), Rgb::new(206, 45, 4), Rgb::new(204, 43, 4), Rgb::new(202, 42, 4),
    Rgb::new(200, 40, 3), Rgb::new(197, 38, 3), Rgb::new(195, 37, 3), Rgb::new(193, 35, 2),
    Rgb::new(190, 33, 2), Rgb::new(188, 32, 2), Rgb::new(185, 30, 2), Rgb::new(183, 29, 2),
    Rgb::new(180, 27, 1), Rgb::new(178, 26, 1), Rgb::new(175, 24, 1), Rgb::new(172, 23, 1),
    Rgb::new(169, 22, 1), Rgb::new(167, 20, 1), Rgb::new(164, 19, 1), Rgb::new(161, 18, 1),
    Rgb::new(158, 16, 1), Rgb::new(155, 15, 1), Rgb::new(152, 14, 1), Rgb::new(149, 13, 1),
    Rgb::new(146, 11, 1), Rgb::new(142, 10, 1), Rgb::new(139, 9, 2), Rgb::new(136, 8, 2),
    Rgb::new(133, 7, 2), Rgb::new(129, 6, 2), Rgb::new(126, 5, 2), Rgb::new(122, 4, 3),
];

/// Cividis colormap, readable under colour vision deficiency.
#[rustfmt::skip]
pub(super) static CIVIDES: [Rgb; 256] = [
    Rgb::new(0, 32, 76), Rgb::new(0, 32, 78), Rgb::new(0, 33, 80), Rgb::new(0, 34, 81),
    Rgb::new(0, 35, 83), Rgb::new(0, 35, 85), Rgb::new(0, 36, 86), Rgb::new(0, 37, 88),
    Rgb::new(0, 38, 90), Rgb::new(0, 38, 91), Rgb::new(0, 39, 93), Rgb::new(0, 40, 95),
    Rgb::new(0, 40, 97), Rgb::new(0, 41, 99), Rgb::new(0, 42, 100), Rgb::new(0, 42, 102),
    Rgb::new(0, 43, 104), Rgb::new(0, 44, 106), Rgb::new(0, 45, 108), Rgb::new(0, 45, 109),
    Rgb::new(0, 46, 110), Rgb::new(0, 46, 111), Rgb::new(0, 47, 111), Rgb::new(0, 47, 111),
    Rgb::new(0, 48, 111), Rgb::new(0, 49, 111), Rgb::new(0, 49, 111), Rgb::new(0, 50, 110),
    Rgb::new(0, 51, 110), Rgb::new(0, 52, 110), Rgb::new(0, 52, 110), Rgb::new(1, 53, 110),
    Rgb::new(6, 54, 110), Rgb::new(10, 55, 109), Rgb::new(14, 55, 109), Rgb::new(18, 56, 109),
    Rgb::new(21, 57, 109), Rgb::new(23, 57, 109), Rgb::new(26, 58, 108), Rgb::new(28, 59, 108),
    Rgb::new(30, 60, 108), Rgb::new(32, 60, 108), Rgb::new(34, 61, 108), Rgb::new(36, 62, 108),
    Rgb::new(38, 62, 108), Rgb::new(39, 63, 108), Rgb::new(41, 64, 107), Rgb::new(43, 65, 107),
    Rgb::new(44, 65, 107), Rgb::new(46, 66, 107), Rgb::new(47, 67, 107), Rgb::new(49, 68, 107),
    Rgb::new(50, 68, 107), Rgb::new(51, 69, 107), Rgb::new(53, 70, 107), Rgb::new(54, 70, 107),
    Rgb::new(55, 71, 107), Rgb::new(56, 72, 107), Rgb::new(58, 73, 107), Rgb::new(59, 73, 107),
    Rgb::new(60, 74, 107), Rgb::new(61, 75, 107), Rgb::new(62, 75, 107), Rgb::new(64, 76, 107),
    Rgb::new(65, 77, 107), Rgb::new(66, 78, 107), Rgb::new(67, 78, 107), Rgb::new(68, 79, 107),
    Rgb::new(69, 80, 107), Rgb::new(70, 80, 107), Rgb::new(71, 81, 107), Rgb::new(72, 82, 107),
    Rgb::new(73, 83, 107), Rgb::new(74, 83, 107), Rgb::new(75, 84, 107), Rgb::new(76, 85, 107),
    Rgb::new(77, 85, 107), Rgb::new(78, 86, 107), Rgb::new(79, 87, 108), Rgb::new(80, 88, 108),
    Rgb::new(81, 88, 108), Rgb::new(82, 89, 108), Rgb::new(83, 90, 108), Rgb::new(84, 90, 108),
    Rgb::new(85, 91, 108), Rgb::new(86, 92, 108), Rgb::new(87, 93, 109), Rgb::new(88, 93, 109),
    Rgb::new(89, 94, 109), Rgb::new(90, 95, 109), Rgb::new(91, 95, 109), Rgb::new(92, 96, 109),
    Rgb::new(93, 97, 110), Rgb::new(94, 98, 110), Rgb::new(95, 98, 110), Rgb::new(95, 99, 110),
    Rgb::new(96, 100, 110), Rgb::new(97, 101, 111), Rgb::new(98, 101, 111), Rgb::new(99, 102, 111),
    Rgb::new(100, 103, 111), Rgb::new(101, 103, 111), Rgb::new(102, 104, 112), Rgb::new(103, 105, 112),
    Rgb::new(104, 106, 112), Rgb::new(104, 106, 112), Rgb::new(105, 107, 113), Rgb::new(106, 108, 113),
    Rgb::new(107, 109, 113), Rgb::new(108, 109, 114), Rgb::new(109, 110, 114), Rgb::new(110, 111, 114),
    Rgb::new(111, 111, 114), Rgb::new(111, 112, 115), Rgb::new(112, 113, 115), Rgb::new(113, 114, 115),
    Rgb::new(114, 114, 116), Rgb::new(115, 115, 116), Rgb::new(116, 116, 117), Rgb::new(117, 117, 117),
    Rgb::new(117, 117, 117), Rgb::new(118, 118, 118), Rgb::new(119, 119, 118), Rgb::new(120, 120, 118),
    Rgb::new(121, 120, 119), Rgb::new(122, 121, 119), Rgb::new(123, 122, 119), Rgb::new(123, 123, 120),
    Rgb::new(124, 123, 120), Rgb::new(125, 124, 120), Rgb::new(126, 125, 120), Rgb::new(127, 126, 120),
    Rgb::new(128, 126, 120), Rgb::new(129, 127, 120), Rgb::new(130, 128, 120), Rgb::new(131, 129, 120),
    Rgb::new(132, 129, 120), Rgb::new(133, 130, 120), Rgb::new(134, 131, 120), Rgb::new(135, 132, 120),
    Rgb::new(136, 133, 120), Rgb::new(137, 133, 120), Rgb::new(138, 134, 120), Rgb::new(139, 135, 120),
    Rgb::new(140, 136, 120), Rgb::new(141, 136, 120), Rgb::new(142, 137, 120), Rgb::new(143, 138, 120),
    Rgb::new(144, 139, 120), Rgb::new(145, 140, 120), Rgb::new(146, 140, 120), Rgb::new(147, 141, 120),
    Rgb::new(148, 142, 120), Rgb::new(149, 143, 120), Rgb::new(150, 143, 119), Rgb::new(151, 144, 119),
    Rgb::new(152, 145, 119), Rgb::new(153, 146, 119), Rgb::new(154, 147, 119), Rgb::new(155, 147, 119),
    Rgb::new(156, 148, 119), Rgb::new(157, 149, 119), Rgb::new(158, 150, 118), Rgb::new(159, 151, 118),
    Rgb::new(160, 152, 118), Rgb::new(161, 152, 118), Rgb::new(162, 153, 118), Rgb::new(163, 154, 117),
    Rgb::new(164, 155, 117), Rgb::new(165, 156, 117), Rgb::new(166, 156, 117), Rgb::new(167, 157, 117),
    Rgb::new(168, 158, 116), Rgb::new(169, 159, 116), Rgb::new(170, 160, 116), Rgb::new(171, 161, 116),
    Rgb::new(172, 161, 115), Rgb::new(173, 162, 115), Rgb::new(174, 163, 115), Rgb::new(175, 164, 115),
    Rgb::new(176, 165, 114), Rgb::new(177, 166, 114), Rgb::new(178, 166, 114), Rgb::new(180, 167, 113),
    Rgb::new(181, 168, 113), Rgb::new(182, 169, 113), Rgb::new(183, 170, 112), Rgb::new(184, 171, 112),
    Rgb::new(185, 171, 112), Rgb::new(186, 172, 111), Rgb::new(187, 173, 111), Rgb::new(188, 174, 110),
    Rgb::new(189, 175, 110), Rgb::new(190, 176, 110), Rgb::new(191, 177, 109), Rgb::new(192, 177, 109),
    Rgb::new(193, 178, 108), Rgb::new(194, 179, 108), Rgb::new(195, 180, 108), Rgb::new(197, 181, 107),
    Rgb::new(198, 182, 107), Rgb::new(199, 183, 106), Rgb::new(200, 184, 106), Rgb::new(201, 184, 105),
    Rgb::new(202, 185, 105), Rgb::new(203, 186, 104), Rgb::new(204, 187, 104), Rgb::new(205, 188, 103),
    Rgb::new(206, 189, 103), Rgb::new(208, 190, 102), Rgb::new(209, 191, 102), Rgb::new(210, 192, 101),
    Rgb::new(211, 192, 101), Rgb::new(212, 193, 100), Rgb::new(213, 194, 99), Rgb::new(214, 195, 99),
    Rgb::new(215, 196, 98), Rgb::new(216, 197, 97), Rgb::new(217, 198, 97), Rgb::new(219, 199, 96),
    Rgb::new(220, 200, 96), Rgb::new(221, 201, 95), Rgb::new(222, 202, 94), Rgb::new(223, 203, 93),
    Rgb::new(224, 203, 93), Rgb::new(225, 204, 92), Rgb::new(227, 205, 91), Rgb::new(228, 206, 91),
    Rgb::new(229, 207, 90), Rgb::new(230, 208, 89), Rgb::new(231, 209, 88), Rgb::new(232, 210, 87),
    Rgb::new(233, 211, 86), Rgb::new(235, 212, 86), Rgb::new(236, 213, 85), Rgb::new(237, 214, 84),
    Rgb::new(238, 215, 83), Rgb::new(239, 216, 82), Rgb::new(240, 217, 81), Rgb::new(241, 218, 80),
    Rgb::new(243, 219, 79), Rgb::new(244, 220, 78), Rgb::new(245, 221, 77), Rgb::new(246, 222, 76),
    Rgb::new(247, 223, 75), Rgb::new(249, 224, 73), Rgb::new(250, 224, 72), Rgb::new(251, 225, 71),
    Rgb::new(252, 226, 70), Rgb::new(253, 227, 69), Rgb::new(255, 228, 67), Rgb::new(255, 229, 66),
    Rgb::new(255, 230, 66), Rgb::new(255, 231, 67), Rgb::new(255, 232, 68), Rgb::new(255, 233, 69),
];
