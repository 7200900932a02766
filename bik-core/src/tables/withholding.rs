//! Monthly withholding income-tax brackets.
//!
//! Maps a post-social-insurance monthly salary and a dependents count to
//! the withholding amount. Literal rows cover [0, 860000) with eight
//! dependents columns (index 7 means "7 or more"); above that, four
//! anchored marginal tiers extend the table with a strictly increasing
//! rate schedule. Each tier's anchor is the literal reference row at the
//! tier floor, so the formula reproduces the tabulated value exactly at
//! every tier boundary.

use rust_decimal::Decimal;

use crate::calculations::common::floor_yen;

/// Columns per row: withholding amounts for 0..=7 dependents.
pub const DEPENDENT_COLUMNS: usize = 8;

/// One literal bracket row: lower bound of the half-open salary interval
/// (upper bound implied by the next row) and the per-dependents amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithholdingRow {
    pub lower: i64,
    pub amounts: [i64; DEPENDENT_COLUMNS],
}

/// A marginal extension tier above the literal table: amounts are the
/// anchor row plus `floor((salary - floor) * rate)` per dependents column.
#[derive(Debug, Clone, Copy)]
struct MarginalTier {
    floor: i64,
    /// Marginal rate applied to the excess over `floor`.
    rate: Decimal,
    /// Literal reference amounts at exactly `floor`.
    anchor: [i64; DEPENDENT_COLUMNS],
}

macro_rules! rows {
    ($(($lower:literal, [$($amount:literal),+]),)*) => {
        [$(WithholdingRow { lower: $lower, amounts: [$($amount),+] },)*]
    };
}

/// Literal bracket rows, ordered by lower bound, covering [0, 860000).
static ROWS: [WithholdingRow; 286] = rows![
    (0, [0, 0, 0, 0, 0, 0, 0, 0]),
    (88000, [130, 0, 0, 0, 0, 0, 0, 0]),
    (89000, [180, 0, 0, 0, 0, 0, 0, 0]),
    (90000, [230, 0, 0, 0, 0, 0, 0, 0]),
    (91000, [290, 0, 0, 0, 0, 0, 0, 0]),
    (92000, [340, 0, 0, 0, 0, 0, 0, 0]),
    (93000, [390, 0, 0, 0, 0, 0, 0, 0]),
    (94000, [440, 0, 0, 0, 0, 0, 0, 0]),
    (95000, [490, 0, 0, 0, 0, 0, 0, 0]),
    (96000, [540, 0, 0, 0, 0, 0, 0, 0]),
    (97000, [590, 0, 0, 0, 0, 0, 0, 0]),
    (98000, [640, 0, 0, 0, 0, 0, 0, 0]),
    (99000, [720, 0, 0, 0, 0, 0, 0, 0]),
    (101000, [830, 0, 0, 0, 0, 0, 0, 0]),
    (103000, [930, 0, 0, 0, 0, 0, 0, 0]),
    (105000, [1030, 0, 0, 0, 0, 0, 0, 0]),
    (107000, [1130, 0, 0, 0, 0, 0, 0, 0]),
    (109000, [1240, 0, 0, 0, 0, 0, 0, 0]),
    (111000, [1340, 0, 0, 0, 0, 0, 0, 0]),
    (113000, [1440, 0, 0, 0, 0, 0, 0, 0]),
    (115000, [1540, 0, 0, 0, 0, 0, 0, 0]),
    (117000, [1640, 0, 0, 0, 0, 0, 0, 0]),
    (119000, [1750, 120, 0, 0, 0, 0, 0, 0]),
    (121000, [1850, 220, 0, 0, 0, 0, 0, 0]),
    (123000, [1950, 330, 0, 0, 0, 0, 0, 0]),
    (125000, [2050, 430, 0, 0, 0, 0, 0, 0]),
    (127000, [2150, 530, 0, 0, 0, 0, 0, 0]),
    (129000, [2260, 630, 0, 0, 0, 0, 0, 0]),
    (131000, [2360, 740, 0, 0, 0, 0, 0, 0]),
    (133000, [2460, 840, 0, 0, 0, 0, 0, 0]),
    (135000, [2550, 930, 0, 0, 0, 0, 0, 0]),
    (137000, [2610, 990, 0, 0, 0, 0, 0, 0]),
    (139000, [2680, 1050, 0, 0, 0, 0, 0, 0]),
    (141000, [2740, 1110, 0, 0, 0, 0, 0, 0]),
    (143000, [2800, 1170, 0, 0, 0, 0, 0, 0]),
    (145000, [2860, 1240, 0, 0, 0, 0, 0, 0]),
    (147000, [2920, 1300, 0, 0, 0, 0, 0, 0]),
    (149000, [2980, 1360, 0, 0, 0, 0, 0, 0]),
    (151000, [3050, 1430, 0, 0, 0, 0, 0, 0]),
    (153000, [3120, 1500, 0, 0, 0, 0, 0, 0]),
    (155000, [3200, 1570, 0, 0, 0, 0, 0, 0]),
    (157000, [3270, 1640, 0, 0, 0, 0, 0, 0]),
    (159000, [3340, 1720, 100, 0, 0, 0, 0, 0]),
    (161000, [3410, 1790, 170, 0, 0, 0, 0, 0]),
    (163000, [3480, 1860, 250, 0, 0, 0, 0, 0]),
    (165000, [3550, 1930, 320, 0, 0, 0, 0, 0]),
    (167000, [3620, 2000, 390, 0, 0, 0, 0, 0]),
    (169000, [3700, 2070, 460, 0, 0, 0, 0, 0]),
    (171000, [3770, 2140, 530, 0, 0, 0, 0, 0]),
    (173000, [3840, 2220, 600, 0, 0, 0, 0, 0]),
    (175000, [3910, 2290, 670, 0, 0, 0, 0, 0]),
    (177000, [3980, 2360, 750, 0, 0, 0, 0, 0]),
    (179000, [4050, 2430, 820, 0, 0, 0, 0, 0]),
    (181000, [4120, 2500, 890, 0, 0, 0, 0, 0]),
    (183000, [4200, 2570, 960, 0, 0, 0, 0, 0]),
    (185000, [4270, 2640, 1030, 0, 0, 0, 0, 0]),
    (187000, [4340, 2720, 1100, 0, 0, 0, 0, 0]),
    (189000, [4410, 2790, 1170, 0, 0, 0, 0, 0]),
    (191000, [4480, 2860, 1250, 0, 0, 0, 0, 0]),
    (193000, [4550, 2930, 1320, 0, 0, 0, 0, 0]),
    (195000, [4630, 3000, 1390, 0, 0, 0, 0, 0]),
    (197000, [4700, 3070, 1460, 0, 0, 0, 0, 0]),
    (199000, [4770, 3140, 1530, 0, 0, 0, 0, 0]),
    (201000, [4840, 3220, 1600, 0, 0, 0, 0, 0]),
    (203000, [4910, 3290, 1670, 0, 0, 0, 0, 0]),
    (205000, [4980, 3360, 1750, 130, 0, 0, 0, 0]),
    (207000, [5050, 3430, 1820, 200, 0, 0, 0, 0]),
    (209000, [5130, 3500, 1890, 280, 0, 0, 0, 0]),
    (211000, [5200, 3570, 1960, 350, 0, 0, 0, 0]),
    (213000, [5270, 3640, 2030, 420, 0, 0, 0, 0]),
    (215000, [5340, 3720, 2100, 490, 0, 0, 0, 0]),
    (217000, [5410, 3790, 2170, 560, 0, 0, 0, 0]),
    (219000, [5480, 3860, 2250, 630, 0, 0, 0, 0]),
    (221000, [5560, 3950, 2340, 710, 0, 0, 0, 0]),
    (224000, [5680, 4060, 2440, 830, 0, 0, 0, 0]),
    (227000, [5780, 4170, 2550, 930, 0, 0, 0, 0]),
    (230000, [5890, 4280, 2650, 1040, 0, 0, 0, 0]),
    (233000, [5990, 4380, 2770, 1140, 0, 0, 0, 0]),
    (236000, [6110, 4490, 2870, 1260, 0, 0, 0, 0]),
    (239000, [6210, 4590, 2980, 1360, 0, 0, 0, 0]),
    (242000, [6320, 4710, 3080, 1470, 0, 0, 0, 0]),
    (245000, [6420, 4810, 3200, 1570, 0, 0, 0, 0]),
    (248000, [6530, 4920, 3300, 1680, 0, 0, 0, 0]),
    (251000, [6640, 5020, 3410, 1790, 170, 0, 0, 0]),
    (254000, [6750, 5140, 3510, 1900, 290, 0, 0, 0]),
    (257000, [6850, 5240, 3620, 2000, 390, 0, 0, 0]),
    (260000, [6960, 5350, 3730, 2110, 500, 0, 0, 0]),
    (263000, [7070, 5450, 3840, 2220, 600, 0, 0, 0]),
    (266000, [7180, 5560, 3940, 2330, 710, 0, 0, 0]),
    (269000, [7280, 5670, 4050, 2430, 820, 0, 0, 0]),
    (272000, [7390, 5780, 4160, 2540, 930, 0, 0, 0]),
    (275000, [7490, 5880, 4270, 2640, 1030, 0, 0, 0]),
    (278000, [7610, 5990, 4370, 2760, 1140, 0, 0, 0]),
    (281000, [7710, 6100, 4480, 2860, 1250, 0, 0, 0]),
    (284000, [7820, 6210, 4580, 2970, 1360, 0, 0, 0]),
    (287000, [7920, 6310, 4700, 3070, 1460, 0, 0, 0]),
    (290000, [8040, 6420, 4800, 3190, 1570, 0, 0, 0]),
    (293000, [8140, 6520, 4910, 3290, 1670, 0, 0, 0]),
    (296000, [8250, 6640, 5010, 3400, 1790, 160, 0, 0]),
    (299000, [8420, 6740, 5130, 3510, 1890, 280, 0, 0]),
    (302000, [8670, 6860, 5250, 3630, 2010, 400, 0, 0]),
    (305000, [8910, 6980, 5370, 3760, 2130, 520, 0, 0]),
    (308000, [9160, 7110, 5490, 3880, 2260, 640, 0, 0]),
    (311000, [9400, 7230, 5620, 4000, 2380, 770, 0, 0]),
    (314000, [9650, 7350, 5740, 4120, 2500, 890, 0, 0]),
    (317000, [9890, 7470, 5860, 4250, 2620, 1010, 0, 0]),
    (320000, [10140, 7600, 5980, 4370, 2750, 1130, 0, 0]),
    (323000, [10380, 7720, 6110, 4490, 2870, 1260, 0, 0]),
    (326000, [10630, 7840, 6230, 4610, 2990, 1380, 0, 0]),
    (329000, [10870, 7960, 6350, 4740, 3110, 1500, 0, 0]),
    (332000, [11120, 8090, 6470, 4860, 3240, 1620, 0, 0]),
    (335000, [11360, 8210, 6600, 4980, 3360, 1750, 130, 0]),
    (338000, [11610, 8370, 6720, 5110, 3480, 1870, 260, 0]),
    (341000, [11850, 8620, 6840, 5230, 3600, 1990, 380, 0]),
    (344000, [12100, 8860, 6960, 5350, 3730, 2110, 500, 0]),
    (347000, [12340, 9110, 7090, 5470, 3850, 2240, 620, 0]),
    (350000, [12590, 9350, 7210, 5600, 3970, 2360, 750, 0]),
    (353000, [12830, 9600, 7330, 5720, 4090, 2480, 870, 0]),
    (356000, [13080, 9840, 7450, 5840, 4220, 2600, 990, 0]),
    (359000, [13320, 10090, 7580, 5960, 4340, 2730, 1110, 0]),
    (362000, [13570, 10330, 7700, 6090, 4460, 2850, 1240, 0]),
    (365000, [13810, 10580, 7820, 6210, 4580, 2970, 1360, 0]),
    (368000, [14060, 10820, 7940, 6330, 4710, 3090, 1480, 0]),
    (371000, [14300, 11070, 8070, 6450, 4830, 3220, 1600, 0]),
    (374000, [14550, 11310, 8190, 6580, 4950, 3340, 1730, 100]),
    (377000, [14790, 11560, 8320, 6700, 5070, 3460, 1850, 220]),
    (380000, [15040, 11800, 8570, 6820, 5200, 3580, 1970, 350]),
    (383000, [15280, 12050, 8810, 6940, 5320, 3710, 2090, 470]),
    (386000, [15530, 12290, 9060, 7070, 5440, 3830, 2220, 590]),
    (389000, [15770, 12540, 9300, 7190, 5560, 3950, 2340, 710]),
    (392000, [16020, 12780, 9550, 7310, 5690, 4070, 2460, 840]),
    (395000, [16260, 13030, 9790, 7430, 5810, 4200, 2580, 960]),
    (398000, [16510, 13270, 10040, 7560, 5930, 4320, 2710, 1080]),
    (401000, [16750, 13520, 10280, 7680, 6050, 4440, 2830, 1200]),
    (404000, [17000, 13760, 10530, 7800, 6180, 4560, 2950, 1330]),
    (407000, [17240, 14010, 10770, 7920, 6300, 4690, 3070, 1450]),
    (410000, [17490, 14250, 11020, 8050, 6420, 4810, 3200, 1570]),
    (413000, [17730, 14500, 11260, 8170, 6540, 4930, 3320, 1690]),
    (416000, [17980, 14740, 11510, 8290, 6670, 5050, 3440, 1820]),
    (419000, [18220, 14990, 11750, 8530, 6790, 5180, 3560, 1940]),
    (422000, [18470, 15230, 12000, 8770, 6910, 5300, 3690, 2060]),
    (425000, [18710, 15480, 12240, 9020, 7030, 5420, 3810, 2180]),
    (428000, [18960, 15720, 12490, 9260, 7160, 5540, 3930, 2310]),
    (431000, [19210, 15970, 12730, 9510, 7280, 5670, 4050, 2430]),
    (434000, [19450, 16210, 12980, 9750, 7400, 5790, 4180, 2550]),
    (437000, [19700, 16460, 13220, 10000, 7520, 5910, 4300, 2680]),
    (440000, [20090, 16700, 13470, 10240, 7650, 6030, 4420, 2800]),
    (443000, [20580, 16950, 13710, 10490, 7770, 6160, 4540, 2920]),
    (446000, [21070, 17190, 13960, 10730, 7890, 6280, 4670, 3040]),
    (449000, [21560, 17440, 14200, 10980, 8010, 6400, 4790, 3170]),
    (452000, [22050, 17680, 14450, 11220, 8140, 6520, 4910, 3290]),
    (455000, [22540, 17930, 14690, 11470, 8260, 6650, 5030, 3410]),
    (458000, [23030, 18170, 14940, 11710, 8470, 6770, 5160, 3530]),
    (461000, [23520, 18420, 15180, 11960, 8720, 6890, 5280, 3660]),
    (464000, [24010, 18660, 15430, 12200, 8960, 7010, 5400, 3780]),
    (467000, [24500, 18910, 15670, 12450, 9210, 7140, 5520, 3900]),
    (470000, [24990, 19150, 15920, 12690, 9450, 7260, 5650, 4020]),
    (473000, [25480, 19400, 16160, 12940, 9700, 7380, 5770, 4150]),
    (476000, [25970, 19640, 16410, 13180, 9940, 7500, 5890, 4270]),
    (479000, [26460, 20000, 16650, 13430, 10190, 7630, 6010, 4390]),
    (482000, [26950, 20490, 16900, 13670, 10430, 7750, 6140, 4510]),
    (485000, [27440, 20980, 17140, 13920, 10680, 7870, 6260, 4640]),
    (488000, [27930, 21470, 17390, 14160, 10920, 7990, 6380, 4760]),
    (491000, [28420, 21960, 17630, 14410, 11170, 8120, 6500, 4880]),
    (494000, [28910, 22450, 17880, 14650, 11410, 8240, 6630, 5000]),
    (497000, [29400, 22940, 18120, 14900, 11660, 8420, 6750, 5130]),
    (500000, [29890, 23430, 18370, 15140, 11900, 8670, 6870, 5250]),
    (503000, [30380, 23920, 18610, 15390, 12150, 8910, 6990, 5370]),
    (506000, [30880, 24410, 18860, 15630, 12390, 9160, 7120, 5490]),
    (509000, [31370, 24900, 19100, 15880, 12640, 9400, 7240, 5620]),
    (512000, [31860, 25390, 19350, 16120, 12890, 9650, 7360, 5740]),
    (515000, [32350, 25880, 19590, 16370, 13130, 9890, 7480, 5860]),
    (518000, [32840, 26370, 19900, 16610, 13380, 10140, 7610, 5980]),
    (521000, [33330, 26860, 20390, 16860, 13620, 10380, 7730, 6110]),
    (524000, [33820, 27350, 20880, 17100, 13870, 10630, 7850, 6230]),
    (527000, [34310, 27840, 21370, 17350, 14110, 10870, 7970, 6350]),
    (530000, [34800, 28330, 21860, 17590, 14360, 11120, 8100, 6470]),
    (533000, [35290, 28820, 22350, 17840, 14600, 11360, 8220, 6600]),
    (536000, [35780, 29310, 22840, 18080, 14850, 11610, 8380, 6720]),
    (539000, [36270, 29800, 23330, 18330, 15090, 11850, 8630, 6840]),
    (542000, [36760, 30290, 23820, 18570, 15340, 12100, 8870, 6960]),
    (545000, [37250, 30780, 24310, 18820, 15580, 12340, 9120, 7090]),
    (548000, [37740, 31270, 24800, 19060, 15830, 12590, 9360, 7210]),
    (551000, [38280, 31810, 25340, 19330, 16100, 12860, 9630, 7350]),
    (554000, [38830, 32370, 25890, 19600, 16380, 13140, 9900, 7480]),
    (557000, [39380, 32920, 26440, 19980, 16650, 13420, 10180, 7630]),
    (560000, [39930, 33470, 27000, 20530, 16930, 13690, 10460, 7760]),
    (563000, [40480, 34020, 27550, 21080, 17200, 13970, 10730, 7900]),
    (566000, [41030, 34570, 28100, 21630, 17480, 14240, 11010, 8040]),
    (569000, [41590, 35120, 28650, 22190, 17760, 14520, 11280, 8180]),
    (572000, [42140, 35670, 29200, 22740, 18030, 14790, 11560, 8330]),
    (575000, [42690, 36230, 29750, 23290, 18310, 15070, 11830, 8610]),
    (578000, [43240, 36780, 30300, 23840, 18580, 15350, 12110, 8880]),
    (581000, [43790, 37330, 30850, 24390, 18860, 15620, 12380, 9160]),
    (584000, [44340, 37880, 31410, 24940, 19130, 15900, 12660, 9430]),
    (587000, [44890, 38430, 31960, 25490, 19410, 16170, 12940, 9710]),
    (590000, [45440, 38980, 32510, 26050, 19680, 16450, 13210, 9990]),
    (593000, [46000, 39530, 33060, 26600, 20130, 16720, 13490, 10260]),
    (596000, [46550, 40080, 33610, 27150, 20690, 17000, 13760, 10540]),
    (599000, [47100, 40640, 34160, 27700, 21240, 17280, 14040, 10810]),
    (602000, [47650, 41190, 34710, 28250, 21790, 17550, 14310, 11090]),
    (605000, [48200, 41740, 35270, 28800, 22340, 17830, 14590, 11360]),
    (608000, [48750, 42290, 35820, 29350, 22890, 18100, 14870, 11640]),
    (611000, [49300, 42840, 36370, 29910, 23440, 18380, 15140, 11920]),
    (614000, [49860, 43390, 36920, 30460, 23990, 18650, 15420, 12190]),
    (617000, [50410, 43940, 37470, 31010, 24540, 18930, 15690, 12470]),
    (620000, [50960, 44500, 38020, 31560, 25100, 19210, 15970, 12740]),
    (623000, [51510, 45050, 38570, 32110, 25650, 19480, 16240, 13020]),
    (626000, [52060, 45600, 39120, 32660, 26200, 19760, 16520, 13290]),
    (629000, [52610, 46150, 39680, 33210, 26750, 20280, 16800, 13570]),
    (632000, [53160, 46700, 40230, 33760, 27300, 20830, 17070, 13840]),
    (635000, [53710, 47250, 40780, 34320, 27850, 21380, 17350, 14120]),
    (638000, [54270, 47800, 41330, 34870, 28400, 21930, 17620, 14400]),
    (641000, [54820, 48350, 41880, 35420, 28960, 22480, 17900, 14670]),
    (644000, [55370, 48910, 42430, 35970, 29510, 23030, 18170, 14950]),
    (647000, [55920, 49460, 42980, 36520, 30060, 23590, 18450, 15220]),
    (650000, [56470, 50010, 43540, 37070, 30610, 24140, 18730, 15500]),
    (653000, [57020, 50560, 44090, 37620, 31160, 24690, 19000, 15770]),
    (656000, [57570, 51110, 44640, 38180, 31710, 25240, 19280, 16050]),
    (659000, [58130, 51660, 45190, 38730, 32260, 25790, 19550, 16330]),
    (662000, [58680, 52210, 45740, 39280, 32810, 26340, 19880, 16600]),
    (665000, [59230, 52770, 46290, 39830, 33370, 26890, 20430, 16880]),
    (668000, [59780, 53320, 46840, 40380, 33920, 27440, 20980, 17150]),
    (671000, [60330, 53870, 47390, 40930, 34470, 28000, 21530, 17430]),
    (674000, [60880, 54420, 47950, 41480, 35020, 28550, 22080, 17700]),
    (677000, [61430, 54970, 48500, 42030, 35570, 29100, 22640, 17980]),
    (680000, [61980, 55520, 49050, 42590, 36120, 29650, 23190, 18260]),
    (683000, [62540, 56070, 49600, 43140, 36670, 30200, 23740, 18530]),
    (686000, [63090, 56620, 50150, 43690, 37230, 30750, 24290, 18810]),
    (689000, [63640, 57180, 50700, 44240, 37780, 31300, 24840, 19080]),
    (692000, [64190, 57730, 51250, 44790, 38330, 31860, 25390, 19360]),
    (695000, [64740, 58280, 51810, 45340, 38880, 32410, 25940, 19630]),
    (698000, [65290, 58830, 52360, 45890, 39430, 32960, 26490, 20030]),
    (701000, [65840, 59380, 52910, 46450, 39980, 33510, 27050, 20580]),
    (704000, [66400, 59930, 53460, 47000, 40530, 34060, 27600, 21130]),
    (707000, [66950, 60480, 54010, 47550, 41090, 34610, 28150, 21690]),
    (710000, [67500, 61040, 54560, 48100, 41640, 35160, 28700, 22240]),
    (713000, [68050, 61590, 55110, 48650, 42190, 35710, 29250, 22790]),
    (716000, [68600, 62140, 55660, 49200, 42740, 36270, 29800, 23340]),
    (719000, [69150, 62690, 56220, 49750, 43290, 36820, 30350, 23890]),
    (722000, [69700, 63240, 56770, 50300, 43840, 37370, 30910, 24440]),
    (725000, [70260, 63790, 57320, 50860, 44390, 37920, 31460, 24990]),
    (728000, [70810, 64340, 57870, 51410, 44940, 38470, 32010, 25550]),
    (731000, [71360, 64890, 58420, 51960, 45500, 39020, 32560, 26100]),
    (734000, [71910, 65450, 58970, 52510, 46050, 39570, 33110, 26650]),
    (737000, [72460, 66000, 59520, 53060, 46600, 40130, 33660, 27200]),
    (740000, [73010, 66550, 60080, 53610, 47150, 40680, 34210, 27750]),
    (743000, [73560, 67100, 60630, 54160, 47700, 41230, 34770, 28300]),
    (746000, [74110, 67650, 61180, 54720, 48250, 41780, 35320, 28850]),
    (749000, [74670, 68200, 61730, 55270, 48800, 42330, 35870, 29400]),
    (752000, [75220, 68750, 62280, 55820, 49360, 42880, 36420, 29960]),
    (755000, [75770, 69310, 62830, 56370, 49910, 43430, 36970, 30510]),
    (758000, [76320, 69860, 63380, 56920, 50460, 43980, 37520, 31060]),
    (761000, [76870, 70410, 63940, 57470, 51010, 44540, 38070, 31610]),
    (764000, [77420, 70960, 64490, 58020, 51560, 45090, 38620, 32160]),
    (767000, [77970, 71510, 65040, 58570, 52110, 45640, 39180, 32710]),
    (770000, [78530, 72060, 65590, 59130, 52660, 46190, 39730, 33260]),
    (773000, [79080, 72610, 66140, 59680, 53210, 46740, 40280, 33820]),
    (776000, [79630, 73160, 66690, 60230, 53770, 47290, 40830, 34370]),
    (779000, [80180, 73720, 67240, 60780, 54320, 47840, 41380, 34920]),
    (782000, [80730, 74270, 67790, 61330, 54870, 48400, 41930, 35470]),
    (785000, [81280, 74820, 68350, 61880, 55420, 48950, 42480, 36020]),
    (788000, [81830, 75370, 68900, 62430, 55970, 49500, 43040, 36570]),
    (791000, [82460, 75920, 69450, 62990, 56520, 50050, 43590, 37120]),
    (794000, [83100, 76470, 70000, 63540, 57070, 50600, 44140, 37670]),
    (797000, [83730, 77020, 70550, 64090, 57630, 51150, 44690, 38230]),
    (800000, [84370, 77580, 71100, 64640, 58180, 51700, 45240, 38780]),
    (803000, [85000, 78130, 71650, 65190, 58730, 52250, 45790, 39330]),
    (806000, [85630, 78680, 72210, 65740, 59280, 52810, 46340, 39880]),
    (809000, [86260, 79230, 72760, 66290, 59830, 53360, 46890, 40430]),
    (812000, [86900, 79780, 73310, 66840, 60380, 53910, 47450, 40980]),
    (815000, [87530, 80330, 73860, 67400, 60930, 54460, 48000, 41530]),
    (818000, [88160, 80880, 74410, 67950, 61480, 55010, 48550, 42090]),
    (821000, [88800, 81430, 74960, 68500, 62040, 55560, 49100, 42640]),
    (824000, [89440, 82000, 75510, 69050, 62590, 56110, 49650, 43190]),
    (827000, [90070, 82630, 76060, 69600, 63140, 56670, 50200, 43740]),
    (830000, [90710, 83260, 76620, 70150, 63690, 57220, 50750, 44290]),
    (833000, [91360, 83930, 77200, 70720, 64260, 57800, 51330, 44860]),
    (836000, [92060, 84630, 77810, 71340, 64870, 58410, 51940, 45480]),
    (839000, [92770, 85340, 78420, 71950, 65490, 59020, 52550, 46090]),
    (842000, [93470, 86040, 79040, 72560, 66100, 59640, 53160, 46700]),
    (845000, [94180, 86740, 79650, 73180, 66710, 60250, 53780, 47310]),
    (848000, [94880, 87450, 80260, 73790, 67320, 60860, 54390, 47930]),
    (851000, [95590, 88150, 80870, 74400, 67940, 61470, 55000, 48540]),
    (854000, [96290, 88860, 81490, 75010, 68550, 62090, 55610, 49150]),
    (857000, [97000, 89560, 82130, 75630, 69160, 62700, 56230, 49760]),
];

/// Marginal tiers from the canonical bracket definition; rates strictly
/// increase with each successive threshold.
static TIERS: [MarginalTier; 4] = [
    MarginalTier {
        floor: 860_000,
        rate: Decimal::from_parts(23483, 0, 0, false, 5),
        anchor: [97350, 89920, 82480, 75930, 69470, 63010, 56530, 50070],
    },
    MarginalTier {
        floor: 970_000,
        rate: Decimal::from_parts(33693, 0, 0, false, 5),
        anchor: [123190, 115760, 108320, 101770, 95310, 88850, 82370, 75910],
    },
    MarginalTier {
        floor: 1_720_000,
        rate: Decimal::from_parts(4084, 0, 0, false, 4),
        anchor: [375890, 368460, 361020, 354470, 348010, 341550, 335070, 328610],
    },
    MarginalTier {
        floor: 3_550_000,
        rate: Decimal::from_parts(45945, 0, 0, false, 5),
        anchor: [1123270, 1115840, 1108400, 1101850, 1095390, 1088930, 1082450, 1075990],
    },
];

/// Salary bound of the literal table; the tier formula applies from here.
const LITERAL_UPPER: i64 = 860_000;

/// Looks up the monthly withholding tax for a post-social-insurance salary
/// and a dependents count (clamped to "7 or more").
pub fn lookup(
    post_social_insurance_salary: Decimal,
    dependents: u32,
) -> Decimal {
    let column = (dependents as usize).min(DEPENDENT_COLUMNS - 1);

    if post_social_insurance_salary < Decimal::from(LITERAL_UPPER) {
        let idx = ROWS
            .partition_point(|row| Decimal::from(row.lower) <= post_social_insurance_salary)
            .saturating_sub(1);
        return Decimal::from(ROWS[idx].amounts[column]);
    }

    // The first tier floor equals the literal table bound, so a tier
    // always matches here.
    let tier = TIERS
        .iter()
        .rev()
        .find(|tier| Decimal::from(tier.floor) <= post_social_insurance_salary)
        .unwrap_or(&TIERS[0]);
    let excess = post_social_insurance_salary - Decimal::from(tier.floor);
    Decimal::from(tier.anchor[column]) + floor_yen(excess * tier.rate)
}
