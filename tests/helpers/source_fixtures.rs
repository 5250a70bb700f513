//! Compiler artifacts of a small transport model.

/// Reference dump of the transport model.
///
/// `seattle_m` and `ny_m` are subsets of `j`, `ne` is a subset of `ny_m`.
pub const TRNSPORT_DUMP: &str = "\
1 i 1 SET 0 canning plants
2 j 1 SET 0 markets
3 seattle_m 1 SET 1 2 markets served from seattle
4 ny_m 1 SET 1 2 markets near new-york
5 ne 1 SET 1 4 north-east markets
6 a 2 PARAM 1 1 capacity of plant i in cases
7 b 2 PARAM 1 2 demand at market j in cases
8 d 2 PARAM 2 1 2 distance in thousands of miles
9 c 2 PARAM 2 1 2 transport cost in thousands of dollars per case
10 x 3 VAR 2 1 2 shipment quantities in cases
11 z 3 VAR 0 total transportation costs in thousands of dollars
12 supply 4 EQU 1 1 observe supply limit at plant i
13 transport 5 MODEL 0
0 42
1 1 i SET declared 20 20 5 1 1 /work/My Models/trnsport.gms
2 1 i SET defined 20 20 20 1 1 /work/My Models/trnsport.gms
3 2 j SET declared 21 21 5 1 1 /work/My Models/trnsport.gms
4 2 j SET defined 21 21 20 1 1 /work/My Models/trnsport.gms
5 8 d PARAM declared 30 30 11 1 1 /work/My Models/trnsport.gms
6 8 d PARAM defined 3 3 1 2 2 /work/My Models/distances.inc
7 8 d PARAM ref 45 45 33 1 1 /work/My Models/trnsport.gms
8 9 c PARAM declared 40 40 11 1 1 /work/My Models/trnsport.gms
9 9 c PARAM assigned 45 45 1 1 1 /work/My Models/trnsport.gms
10 10 x VAR declared 50 50 10 1 1 /work/My Models/trnsport.gms
11 10 x VAR ref 60 60 30 1 1 /work/My Models/trnsport.gms
12 10 x VAR ref 61 61 30 1 1 /work/My Models/trnsport.gms
13 10 x VAR impl-asn 70 70 1 1 1 /work/My Models/trnsport.gms
14 12 supply EQU declared 55 55 12 1 1 /work/My Models/trnsport.gms
15 12 supply EQU defined 60 60 1 1 1 /work/My Models/trnsport.gms
16 13 transport MODEL declared 65 65 7 1 1 /work/My Models/trnsport.gms
17 1 i SET control 60 60 24 1 1 /work/My Models/trnsport.gms
";

/// Listing of the same compile, with an include summary.
pub const TRNSPORT_LISTING: &str = "\
GAMS 45.1.0  r9c9a8c8 Released Jan 25, 2024 LEX-LEG x86 64bit/Linux
General Algebraic Modeling System
Compilation


   1  Sets
   2       i   canning plants   / seattle, san-diego /

Include File Summary


   SEQ   GLOBAL TYPE      PARENT   LOCAL  FILENAME

     1        1 INPUT          0       0  /work/My Models/wrapper.gms
     2        1 INCLUDE        1       1  ./work/My Models/trnsport.gms
     3       31 INCLUDE        2      30  ../work/My Models/distances.inc
     4       35 GDXIN          3       4  .../work/My Models/dist.gdx
     5       48 BATINCLUDE     2      46  ../work/My Models/report.gms
     6       80 INCLUDE        1      80  ./work/My Models/solve.gms


COMPILATION TIME     =        0.002 SECONDS      3 MB  45.1.0 r9c9a8c8 LEX-LEG
";
