//! Bikram Sambat month-length table.
//!
//! Nepali month lengths follow official almanac data rather than a rule, so
//! every supported year is listed explicitly.

use crate::consts::{JANUARY, MAX_MONTH, MAX_YEAR, MIN_YEAR, TABLE_START_YEAR};

/// Number of years covered by [`NEPALI_YEARS`]
const TABLE_LEN: usize = 282;

/// Row layout: `[days in year, Baisakh, Jestha, Asar, Shrawan, Bhadra, Asoj,
/// Kartik, Mangsir, Poush, Magh, Falgun, Chaitra]`, one row per year starting
/// at `TABLE_START_YEAR`.
static NEPALI_YEARS: [[u16; 13]; TABLE_LEN] = [
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 1969
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 1970
    [365, 31, 31, 32, 31, 32, 30, 30, 29, 30, 29, 30, 30], // 1971
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 1972
    [365, 30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 1973
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 1974
    [365, 31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 1975
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 1976
    [365, 30, 32, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31], // 1977
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 1978
    [365, 31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 1979
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 1980
    [365, 31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31], // 1981
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 1982
    [365, 31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 1983
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 1984
    [365, 31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 1985
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 1986
    [365, 31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 1987
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 1988
    [365, 31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 1989
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 1990
    [365, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 1991
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 1992
    [365, 31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 1993
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 1994
    [365, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 1995
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 1996
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 1997
    [365, 31, 31, 32, 31, 32, 30, 30, 29, 30, 29, 30, 30], // 1998
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 1999
    [365, 30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2000
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2001
    [365, 31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2002
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2003
    [365, 30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2004
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2005
    [365, 31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2006
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2007
    [365, 31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31], // 2008
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2009
    [365, 31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2010
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2011
    [365, 31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2012
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2013
    [365, 31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2014
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2015
    [365, 31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2016
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2017
    [365, 31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2018
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2019
    [365, 31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2020
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2021
    [365, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2022
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2023
    [365, 31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2024
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2025
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2026
    [365, 30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2027
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2028
    [365, 31, 31, 32, 31, 32, 30, 30, 29, 30, 29, 30, 30], // 2029
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2030
    [365, 30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2031
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2032
    [365, 31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2033
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2034
    [365, 30, 32, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31], // 2035
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2036
    [365, 31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2037
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2038
    [365, 31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2039
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2040
    [365, 31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2041
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2042
    [365, 31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2043
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2044
    [365, 31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2045
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2046
    [365, 31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2047
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2048
    [365, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2049
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2050
    [365, 31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2051
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2052
    [365, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2053
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2054
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2055
    [365, 31, 31, 32, 31, 32, 30, 30, 29, 30, 29, 30, 30], // 2056
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2057
    [365, 30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2058
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2059
    [365, 31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2060
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2061
    [365, 30, 32, 31, 32, 31, 31, 29, 30, 29, 30, 29, 31], // 2062
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2063
    [365, 31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2064
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2065
    [365, 31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31], // 2066
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2067
    [365, 31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2068
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2069
    [365, 31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2070
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2071
    [365, 31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2072
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2073
    [365, 31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2074
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2075
    [365, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2076
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2077
    [365, 31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2078
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2079
    [365, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2080
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2081
    [365, 31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2082
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2083
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2084
    [365, 30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2085
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2086
    [365, 31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2087
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2088
    [365, 30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2089
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2090
    [365, 31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2091
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2092
    [365, 31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31], // 2093
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2094
    [365, 31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2095
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2096
    [365, 31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2097
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2098
    [365, 31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2099
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2100
    [365, 31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2101
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2102
    [365, 31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2103
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2104
    [365, 31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2105
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2106
    [365, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2107
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2108
    [365, 31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2109
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2110
    [365, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2111
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2112
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2113
    [365, 31, 31, 32, 31, 32, 30, 30, 29, 30, 29, 30, 30], // 2114
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2115
    [365, 30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2116
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2117
    [365, 31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2118
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2119
    [365, 30, 32, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31], // 2120
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2121
    [365, 31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2122
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2123
    [365, 31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2124
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2125
    [365, 31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2126
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2127
    [365, 31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2128
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2129
    [365, 31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2130
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2131
    [365, 31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2132
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2133
    [365, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2134
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2135
    [365, 31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2136
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2137
    [365, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2138
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2139
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2140
    [365, 31, 31, 32, 31, 32, 30, 30, 29, 30, 29, 30, 30], // 2141
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2142
    [365, 30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2143
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2144
    [365, 31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2145
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2146
    [365, 30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2147
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2148
    [365, 31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2149
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2150
    [365, 31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31], // 2151
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2152
    [365, 31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2153
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2154
    [365, 31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2155
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2156
    [365, 31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2157
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2158
    [365, 31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2159
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2160
    [365, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2161
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2162
    [365, 31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2163
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2164
    [365, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2165
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2166
    [365, 31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2167
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2168
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2169
    [365, 30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2170
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2171
    [365, 31, 31, 32, 31, 32, 30, 30, 29, 30, 29, 30, 30], // 2172
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2173
    [365, 30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2174
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2175
    [365, 31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2176
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2177
    [365, 30, 32, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31], // 2178
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2179
    [365, 31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2180
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2181
    [365, 31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2182
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2183
    [365, 31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2184
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2185
    [365, 31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2186
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2187
    [365, 31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2188
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2189
    [365, 31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2190
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2191
    [365, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2192
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2193
    [365, 31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2194
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2195
    [365, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2196
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2197
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2198
    [365, 31, 31, 32, 31, 32, 30, 30, 29, 30, 29, 30, 30], // 2199
    [372, 31, 31, 31, 31, 31, 31, 31, 31, 31, 31, 31, 31], // 2200
    [365, 30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2201
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2202
    [365, 31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2203
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2204
    [365, 31, 31, 31, 32, 31, 31, 29, 30, 29, 30, 29, 31], // 2205
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2206
    [365, 31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2207
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2208
    [365, 31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2209
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2210
    [365, 31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2211
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2212
    [365, 31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2213
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2214
    [365, 31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2215
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2216
    [365, 31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2217
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2218
    [365, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2219
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2220
    [365, 31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2221
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2222
    [365, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2223
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2224
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2225
    [365, 31, 31, 32, 31, 32, 30, 30, 29, 30, 29, 30, 30], // 2226
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2227
    [365, 30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2228
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2229
    [365, 31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2230
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2231
    [365, 30, 32, 31, 32, 31, 31, 29, 30, 29, 30, 29, 31], // 2232
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2233
    [365, 31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2234
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2235
    [365, 31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31], // 2236
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2237
    [365, 31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2238
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2239
    [365, 31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2240
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2241
    [365, 31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2242
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2243
    [365, 31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2244
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2245
    [365, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2246
    [366, 31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2247
    [365, 31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2248
    [365, 31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2249
    [365, 31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2250
];

/// Last year present in the table
pub const TABLE_END_YEAR: i32 = MAX_YEAR;

fn row(year: i32) -> Option<&'static [u16; 13]> {
    let index = usize::try_from(year.checked_sub(TABLE_START_YEAR)?).ok()?;
    NEPALI_YEARS.get(index)
}

/// Returns the number of days in a Nepali year.
///
/// Years outside the table yield `0`; callers walking the table stop there.
pub fn days_in_year(year: i32) -> u16 {
    row(year).map_or(0, |days| days[0])
}

/// Returns the number of days in a Nepali month (1-indexed).
///
/// Years outside the table and months outside `1..=12` yield `0`.
pub fn days_in_month(year: i32, month: u8) -> u16 {
    if !(JANUARY..=MAX_MONTH).contains(&month) {
        return 0;
    }
    row(year).map_or(0, |days| days[usize::from(month)])
}

/// Returns the twelve month lengths of a Nepali year, or `None` outside the table.
pub fn month_lengths(year: i32) -> Option<[u16; 12]> {
    let days = row(year)?;
    let mut months = [0; 12];
    months.copy_from_slice(&days[1..]);
    Some(months)
}

/// Whether `year` can be held by a `NepaliDateTime`
pub fn is_supported_year(year: i32) -> bool {
    (MIN_YEAR..=MAX_YEAR).contains(&year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_reference_year_through_max() {
        let span = usize::try_from(TABLE_END_YEAR - TABLE_START_YEAR + 1).unwrap();
        assert_eq!(NEPALI_YEARS.len(), span);
        assert_eq!(days_in_year(TABLE_START_YEAR), 366);
        assert_eq!(days_in_year(TABLE_END_YEAR), 365);
    }

    #[test]
    fn test_month_lengths_sum_to_year_total() {
        for year in TABLE_START_YEAR..=TABLE_END_YEAR {
            let months = month_lengths(year).unwrap();
            let total: u16 = months.iter().sum();
            assert_eq!(total, days_in_year(year), "Year {year} months do not add up");
        }
    }

    #[test]
    fn test_year_1970_row() {
        assert_eq!(
            month_lengths(1970),
            Some([31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30])
        );
        assert_eq!(days_in_year(1970), 365);
        assert_eq!(days_in_month(1970, 3), 32);
        assert_eq!(days_in_month(1970, 12), 30);
    }

    #[test]
    fn test_irregular_year_2200() {
        assert_eq!(days_in_year(2200), 372);
        assert!((1..=12).all(|month| days_in_month(2200, month) == 31));
    }

    #[test]
    fn test_lookup_outside_table_is_zero() {
        assert_eq!(days_in_year(1968), 0);
        assert_eq!(days_in_year(2251), 0);
        assert_eq!(days_in_year(i32::MIN), 0);
        assert_eq!(days_in_month(2251, 1), 0);
        assert_eq!(month_lengths(1968), None);
    }

    #[test]
    fn test_lookup_invalid_month_is_zero() {
        assert_eq!(days_in_month(2080, 0), 0);
        assert_eq!(days_in_month(2080, 13), 0);
    }

    #[test]
    fn test_is_supported_year() {
        assert!(!is_supported_year(1969));
        assert!(is_supported_year(1970));
        assert!(is_supported_year(2250));
        assert!(!is_supported_year(2251));
    }
}
